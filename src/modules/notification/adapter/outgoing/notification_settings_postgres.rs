use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::notification::application::domain::{NotificationSettings, NotificationSettingsFilter};
use crate::store::adapter::outgoing::{
    advance_id_sequence, bounded, map_db_err, DEFAULT_STORE_TIMEOUT,
};
use crate::store::application::domain::{EntityId, UserId};
use crate::store::application::ports::outgoing::{
    KeyedEntityStore, StoreError, StoredEntity, UserKeyedStore,
};

use super::sea_orm_entity::notification_settings::{
    ActiveModel as SettingsActiveModel, Column as SettingsColumn, Entity as SettingsEntity,
};

#[derive(Debug, Clone)]
pub struct NotificationSettingsPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl NotificationSettingsPostgres {
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

    async fn find_by_id(&self, id: EntityId) -> Result<Option<NotificationSettings>, StoreError> {
        let model = SettingsEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_owned_by(&self, user_id: UserId) -> Result<Option<NotificationSettings>, StoreError> {
        let model = SettingsEntity::find()
            .filter(SettingsColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}

fn to_condition(filter: &NotificationSettingsFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(push) = filter.push_notifications {
        condition = condition.add(SettingsColumn::PushNotifications.eq(push));
    }
    if let Some(weekend) = filter.weekend_notifications {
        condition = condition.add(SettingsColumn::WeekendNotifications.eq(weekend));
    }
    if let Some(max) = filter.max_min_discount_percent {
        condition = condition.add(SettingsColumn::MinDiscountPercent.lte(max));
    }

    condition
}

#[async_trait]
impl KeyedEntityStore<NotificationSettings> for NotificationSettingsPostgres {
    async fn get(&self, key: &EntityId) -> Result<NotificationSettings, StoreError> {
        bounded(self.timeout, "notification_settings.get", async {
            self.find_by_id(*key).await?.ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn exists_by_primary_key(&self, key: &EntityId) -> Result<bool, StoreError> {
        bounded(self.timeout, "notification_settings.exists", async {
            Ok(self.find_by_id(*key).await?.is_some())
        })
        .await
    }

    async fn find_all_where(
        &self,
        filter: NotificationSettingsFilter,
    ) -> Result<Vec<NotificationSettings>, StoreError> {
        bounded(self.timeout, "notification_settings.find_all_where", async {
            let models = SettingsEntity::find()
                .filter(to_condition(&filter))
                .order_by_asc(SettingsColumn::Id)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(models.iter().map(|m| m.to_domain()).collect())
        })
        .await
    }

    /// New records are inserted and get a database id. Records that carry an
    /// id are upserted on it, so saving twice never duplicates a row; the id
    /// sequence is then moved past that id.
    async fn save(&self, entity: NotificationSettings) -> Result<NotificationSettings, StoreError> {
        entity.validate()?;

        bounded(self.timeout, "notification_settings.save", async {
            let active = SettingsActiveModel::from(&entity);

            let model = if entity.is_persisted() {
                let model = SettingsEntity::insert(active)
                    .on_conflict(
                        OnConflict::column(SettingsColumn::Id)
                            .update_columns([
                                SettingsColumn::UserId,
                                SettingsColumn::PushNotifications,
                                SettingsColumn::NotificationStartTime,
                                SettingsColumn::NotificationEndTime,
                                SettingsColumn::WeekendNotifications,
                                SettingsColumn::MinDiscountPercent,
                            ])
                            .to_owned(),
                    )
                    .exec_with_returning(&*self.db)
                    .await
                    .map_err(map_db_err)?;

                advance_id_sequence(&self.db, "notification_settings", model.id).await?;
                model
            } else {
                active.insert(&*self.db).await.map_err(map_db_err)?
            };

            debug!(id = model.id, user_id = model.user_id, "Saved notification settings");
            Ok(model.to_domain())
        })
        .await
    }

    async fn delete_by_primary_key(&self, key: &EntityId) -> Result<(), StoreError> {
        bounded(self.timeout, "notification_settings.delete", async {
            SettingsEntity::delete_by_id(key.value())
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(())
        })
        .await
    }
}

#[async_trait]
impl UserKeyedStore<NotificationSettings> for NotificationSettingsPostgres {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<NotificationSettings>, StoreError> {
        bounded(
            self.timeout,
            "notification_settings.find_by_user_id",
            self.find_owned_by(user_id),
        )
        .await
    }

    async fn exists_by_user_id(&self, user_id: UserId) -> Result<bool, StoreError> {
        bounded(self.timeout, "notification_settings.exists_by_user_id", async {
            Ok(self.find_owned_by(user_id).await?.is_some())
        })
        .await
    }

    async fn delete_by_user_id(&self, user_id: UserId) -> Result<u64, StoreError> {
        bounded(self.timeout, "notification_settings.delete_by_user_id", async {
            let result = SettingsEntity::delete_many()
                .filter(SettingsColumn::UserId.eq(user_id.value()))
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(result.rows_affected)
        })
        .await
    }
}
