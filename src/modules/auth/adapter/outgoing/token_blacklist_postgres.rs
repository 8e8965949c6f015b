use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::auth::application::domain::entities::BlacklistToken;
use crate::store::adapter::outgoing::{bounded, map_db_err, DEFAULT_STORE_TIMEOUT};
use crate::store::application::ports::outgoing::{
    AllRecords, KeyedEntityStore, StoreError, StoredEntity,
};

use super::sea_orm_entity::blacklist_tokens::{
    ActiveModel as BlacklistTokenActiveModel, Column as BlacklistTokenColumn,
    Entity as BlacklistTokenEntity,
};

/// PostgreSQL-backed token blacklist, for deployments without Redis.
#[derive(Debug, Clone)]
pub struct TokenBlacklistPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl TokenBlacklistPostgres {
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

    async fn find(&self, access_token: &str) -> Result<Option<BlacklistToken>, StoreError> {
        let model = BlacklistTokenEntity::find_by_id(access_token.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}

#[async_trait]
impl KeyedEntityStore<BlacklistToken> for TokenBlacklistPostgres {
    async fn get(&self, key: &String) -> Result<BlacklistToken, StoreError> {
        bounded(self.timeout, "blacklist.get", async {
            self.find(key).await?.ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn exists_by_primary_key(&self, key: &String) -> Result<bool, StoreError> {
        bounded(self.timeout, "blacklist.exists", async {
            Ok(self.find(key).await?.is_some())
        })
        .await
    }

    async fn find_all_where(&self, _filter: AllRecords) -> Result<Vec<BlacklistToken>, StoreError> {
        bounded(self.timeout, "blacklist.find_all", async {
            let models = BlacklistTokenEntity::find()
                .order_by_asc(BlacklistTokenColumn::AccessToken)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(models.iter().map(|m| m.to_domain()).collect())
        })
        .await
    }

    /// `INSERT ... ON CONFLICT DO NOTHING`: revoking an already revoked
    /// token succeeds.
    async fn save(&self, entity: BlacklistToken) -> Result<BlacklistToken, StoreError> {
        entity.validate()?;

        bounded(self.timeout, "blacklist.save", async {
            let active = BlacklistTokenActiveModel {
                access_token: Set(entity.access_token().to_string()),
            };

            let inserted = BlacklistTokenEntity::insert(active)
                .on_conflict(
                    OnConflict::column(BlacklistTokenColumn::AccessToken)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&*self.db)
                .await
                .map_err(map_db_err)?;

            debug!(
                token = %entity.fingerprint(),
                inserted,
                "Token blacklisted in Postgres"
            );
            Ok(entity)
        })
        .await
    }

    async fn delete_by_primary_key(&self, key: &String) -> Result<(), StoreError> {
        bounded(self.timeout, "blacklist.delete", async {
            BlacklistTokenEntity::delete_by_id(key.clone())
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            Ok(())
        })
        .await
    }
}
