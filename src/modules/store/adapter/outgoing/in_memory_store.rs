use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::application::domain::{StoreKey, UserId};
use crate::store::application::ports::outgoing::{
    KeyedEntityStore, StoreError, StoredEntity, UserKeyedStore, UserOwned,
};

struct Records<E: StoredEntity> {
    rows: BTreeMap<E::Key, E>,
    by_user: HashMap<UserId, E::Key>,
    sequence: i64,
}

/// In-process store for any [`StoredEntity`].
///
/// A single `RwLock` guards both the rows and the `user_id` index, so a
/// uniqueness check and the write it protects happen under the same guard
/// and readers never see a half-applied save. Clones share the same data.
#[derive(Clone)]
pub struct InMemoryStore<E: StoredEntity> {
    records: Arc<RwLock<Records<E>>>,
}

impl<E: StoredEntity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records {
                rows: BTreeMap::new(),
                by_user: HashMap::new(),
                sequence: 0,
            })),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<E: StoredEntity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: StoredEntity> Records<E> {
    fn next_key(&mut self) -> Result<E::Key, StoreError> {
        loop {
            let candidate = E::Key::from_sequence(self.sequence + 1).ok_or_else(|| {
                StoreError::InvalidEntity("primary key is required for this entity".to_string())
            })?;
            self.sequence += 1;
            // Explicitly keyed saves may already occupy a sequence value
            if !self.rows.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

#[async_trait]
impl<E: StoredEntity> KeyedEntityStore<E> for InMemoryStore<E> {
    async fn get(&self, key: &E::Key) -> Result<E, StoreError> {
        let records = self.records.read().await;
        records.rows.get(key).cloned().ok_or(StoreError::NotFound)
    }

    async fn exists_by_primary_key(&self, key: &E::Key) -> Result<bool, StoreError> {
        let records = self.records.read().await;
        Ok(records.rows.contains_key(key))
    }

    async fn find_all_where(&self, filter: E::Filter) -> Result<Vec<E>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .rows
            .values()
            .filter(|entity| entity.matches(&filter))
            .cloned()
            .collect())
    }

    async fn save(&self, mut entity: E) -> Result<E, StoreError> {
        entity.validate()?;

        let mut guard = self.records.write().await;
        let records = &mut *guard;

        let key = match entity.primary_key() {
            Some(key) => key,
            None => {
                let key = records.next_key()?;
                entity.set_primary_key(key.clone());
                key
            }
        };

        if let Some(user_id) = entity.user_id() {
            if let Some(owner_key) = records.by_user.get(&user_id) {
                if *owner_key != key {
                    return Err(StoreError::UniqueConstraintViolation(format!(
                        "user_id {user_id} already has a record"
                    )));
                }
            }
        }

        // An update may move the record to another user
        if let Some(previous_user) = records.rows.get(&key).and_then(|prev| prev.user_id()) {
            if Some(previous_user) != entity.user_id() {
                records.by_user.remove(&previous_user);
            }
        }

        if let Some(user_id) = entity.user_id() {
            records.by_user.insert(user_id, key.clone());
        }
        records.rows.insert(key.clone(), entity.clone());

        debug!(key = %key, "Saved record in memory");
        Ok(entity)
    }

    async fn delete_by_primary_key(&self, key: &E::Key) -> Result<(), StoreError> {
        let mut guard = self.records.write().await;
        let records = &mut *guard;

        if let Some(removed) = records.rows.remove(key) {
            if let Some(user_id) = removed.user_id() {
                records.by_user.remove(&user_id);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<E: UserOwned> UserKeyedStore<E> for InMemoryStore<E> {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<E>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .by_user
            .get(&user_id)
            .and_then(|key| records.rows.get(key))
            .cloned())
    }

    async fn exists_by_user_id(&self, user_id: UserId) -> Result<bool, StoreError> {
        let records = self.records.read().await;
        Ok(records.by_user.contains_key(&user_id))
    }

    async fn delete_by_user_id(&self, user_id: UserId) -> Result<u64, StoreError> {
        let mut guard = self.records.write().await;
        let records = &mut *guard;

        match records.by_user.remove(&user_id) {
            Some(key) => {
                records.rows.remove(&key);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
