use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use std::time::Duration;

use crate::notification::application::domain::UserPreference;
use crate::store::adapter::outgoing::{
    advance_id_sequence, bounded, map_db_err, DEFAULT_STORE_TIMEOUT,
};
use crate::store::application::domain::{EntityId, UserId};
use crate::store::application::ports::outgoing::{
    AllRecords, KeyedEntityStore, StoreError, UserKeyedStore,
};

use super::sea_orm_entity::user_preferences::{
    ActiveModel as PreferenceActiveModel, Column as PreferenceColumn, Entity as PreferenceEntity,
};

#[derive(Debug, Clone)]
pub struct UserPreferencePostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl UserPreferencePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<UserPreference>, StoreError> {
        let model = PreferenceEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_owned_by(&self, user_id: UserId) -> Result<Option<UserPreference>, StoreError> {
        let model = PreferenceEntity::find()
            .filter(PreferenceColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}

#[async_trait]
impl KeyedEntityStore<UserPreference> for UserPreferencePostgres {
    async fn get(&self, key: &EntityId) -> Result<UserPreference, StoreError> {
        bounded(self.timeout, "user_preferences.get", async {
            self.find_by_id(*key).await?.ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn exists_by_primary_key(&self, key: &EntityId) -> Result<bool, StoreError> {
        bounded(self.timeout, "user_preferences.exists", async {
            Ok(self.find_by_id(*key).await?.is_some())
        })
        .await
    }

    async fn find_all_where(&self, _filter: AllRecords) -> Result<Vec<UserPreference>, StoreError> {
        bounded(self.timeout, "user_preferences.find_all", async {
            let models = PreferenceEntity::find()
                .order_by_asc(PreferenceColumn::Id)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(models.iter().map(|m| m.to_domain()).collect())
        })
        .await
    }

    async fn save(&self, entity: UserPreference) -> Result<UserPreference, StoreError> {
        bounded(self.timeout, "user_preferences.save", async {
            let active = PreferenceActiveModel::from(&entity);

            let model = match entity.id {
                Some(_) => {
                    let model = PreferenceEntity::insert(active)
                        .on_conflict(
                            OnConflict::column(PreferenceColumn::Id)
                                .update_column(PreferenceColumn::UserId)
                                .to_owned(),
                        )
                        .exec_with_returning(&*self.db)
                        .await
                        .map_err(map_db_err)?;

                    advance_id_sequence(&self.db, "user_preferences", model.id).await?;
                    model
                }
                None => active.insert(&*self.db).await.map_err(map_db_err)?,
            };

            Ok(model.to_domain())
        })
        .await
    }

    async fn delete_by_primary_key(&self, key: &EntityId) -> Result<(), StoreError> {
        bounded(self.timeout, "user_preferences.delete", async {
            PreferenceEntity::delete_by_id(key.value())
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(())
        })
        .await
    }
}

#[async_trait]
impl UserKeyedStore<UserPreference> for UserPreferencePostgres {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<UserPreference>, StoreError> {
        bounded(
            self.timeout,
            "user_preferences.find_by_user_id",
            self.find_owned_by(user_id),
        )
        .await
    }

    async fn exists_by_user_id(&self, user_id: UserId) -> Result<bool, StoreError> {
        bounded(self.timeout, "user_preferences.exists_by_user_id", async {
            Ok(self.find_owned_by(user_id).await?.is_some())
        })
        .await
    }

    async fn delete_by_user_id(&self, user_id: UserId) -> Result<u64, StoreError> {
        bounded(self.timeout, "user_preferences.delete_by_user_id", async {
            let result = PreferenceEntity::delete_many()
                .filter(PreferenceColumn::UserId.eq(user_id.value()))
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(result.rows_affected)
        })
        .await
    }
}
