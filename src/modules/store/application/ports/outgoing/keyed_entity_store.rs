use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use super::StoreError;
use crate::store::application::domain::{StoreKey, UserId};

/// An entity that can live in a [`KeyedEntityStore`].
pub trait StoredEntity: Clone + fmt::Debug + Send + Sync + 'static {
    type Key: StoreKey;

    /// Field predicate accepted by `find_all_where`.
    type Filter: fmt::Debug + Send + Sync;

    /// `None` means "not persisted yet"; `save` assigns a key.
    fn primary_key(&self) -> Option<Self::Key>;

    fn set_primary_key(&mut self, key: Self::Key);

    /// The unique secondary key, for entities that have one.
    fn user_id(&self) -> Option<UserId> {
        None
    }

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Field-level checks run by every store before writing.
    fn validate(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Marker for entities whose `user_id()` is always `Some` and unique
/// across the store.
pub trait UserOwned: StoredEntity {}

/// Filter for entities without queryable fields: matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllRecords;

/// Keyed storage for one entity type.
///
/// Implementations must be read-after-write consistent: once `save`
/// returns, `exists_by_primary_key` for that key is `true` for every
/// caller until the record is deleted.
#[async_trait]
pub trait KeyedEntityStore<E: StoredEntity>: Send + Sync {
    /// Exact-match lookup; a miss is `StoreError::NotFound`.
    async fn get(&self, key: &E::Key) -> Result<E, StoreError>;

    async fn exists_by_primary_key(&self, key: &E::Key) -> Result<bool, StoreError>;

    /// Every record matching `filter`, in store order. Each call re-reads
    /// the store.
    async fn find_all_where(&self, filter: E::Filter) -> Result<Vec<E>, StoreError>;

    /// Insert-or-update by primary key. Returns the entity with its key
    /// populated.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    /// Removing a missing key succeeds.
    async fn delete_by_primary_key(&self, key: &E::Key) -> Result<(), StoreError>;
}

/// Lookup, existence and deletion by the unique `user_id`.
#[async_trait]
pub trait UserKeyedStore<E: UserOwned>: KeyedEntityStore<E> {
    /// `Ok(None)` when the user has no record.
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<E>, StoreError>;

    async fn exists_by_user_id(&self, user_id: UserId) -> Result<bool, StoreError>;

    /// Number of records removed: 0 or 1.
    async fn delete_by_user_id(&self, user_id: UserId) -> Result<u64, StoreError>;
}

#[async_trait]
impl<E, S> KeyedEntityStore<E> for Arc<S>
where
    E: StoredEntity,
    S: KeyedEntityStore<E> + ?Sized,
{
    async fn get(&self, key: &E::Key) -> Result<E, StoreError> {
        (**self).get(key).await
    }

    async fn exists_by_primary_key(&self, key: &E::Key) -> Result<bool, StoreError> {
        (**self).exists_by_primary_key(key).await
    }

    async fn find_all_where(&self, filter: E::Filter) -> Result<Vec<E>, StoreError> {
        (**self).find_all_where(filter).await
    }

    async fn save(&self, entity: E) -> Result<E, StoreError> {
        (**self).save(entity).await
    }

    async fn delete_by_primary_key(&self, key: &E::Key) -> Result<(), StoreError> {
        (**self).delete_by_primary_key(key).await
    }
}

#[async_trait]
impl<E, S> UserKeyedStore<E> for Arc<S>
where
    E: UserOwned,
    S: UserKeyedStore<E> + ?Sized,
{
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<E>, StoreError> {
        (**self).find_by_user_id(user_id).await
    }

    async fn exists_by_user_id(&self, user_id: UserId) -> Result<bool, StoreError> {
        (**self).exists_by_user_id(user_id).await
    }

    async fn delete_by_user_id(&self, user_id: UserId) -> Result<u64, StoreError> {
        (**self).delete_by_user_id(user_id).await
    }
}
