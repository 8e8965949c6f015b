use async_trait::async_trait;

use crate::store::application::domain::UserId;
use crate::store::application::ports::outgoing::{
    KeyedEntityStore, StoreError, StoredEntity, UserKeyedStore, UserOwned,
};

/// A store whose backend is down: every call fails with `StoreUnavailable`.
#[derive(Debug, Default, Clone)]
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::StoreUnavailable("backend unreachable".to_string())
}

#[async_trait]
impl<E: StoredEntity> KeyedEntityStore<E> for UnavailableStore {
    async fn get(&self, _key: &E::Key) -> Result<E, StoreError> {
        Err(unavailable())
    }

    async fn exists_by_primary_key(&self, _key: &E::Key) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn find_all_where(&self, _filter: E::Filter) -> Result<Vec<E>, StoreError> {
        Err(unavailable())
    }

    async fn save(&self, _entity: E) -> Result<E, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_primary_key(&self, _key: &E::Key) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

#[async_trait]
impl<E: UserOwned> UserKeyedStore<E> for UnavailableStore {
    async fn find_by_user_id(&self, _user_id: UserId) -> Result<Option<E>, StoreError> {
        Err(unavailable())
    }

    async fn exists_by_user_id(&self, _user_id: UserId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_user_id(&self, _user_id: UserId) -> Result<u64, StoreError> {
        Err(unavailable())
    }
}
