use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::auth::application::domain::entities::BlacklistToken;
use crate::store::adapter::outgoing::{bounded, DEFAULT_STORE_TIMEOUT};
use crate::store::application::ports::outgoing::{
    AllRecords, KeyedEntityStore, StoreError, StoredEntity,
};

const KEY_PREFIX: &str = "auth:blacklist:token:";
const SCAN_BATCH: usize = 200;

/// Redis-backed token blacklist.
///
/// ## Redis data model
/// ```text
/// auth:blacklist:token:{access_token} -> "1"
/// ```
/// - Exists ⇒ token is revoked
/// - No TTL: a key lives until it is deleted explicitly
///
/// `SET` and `EXISTS` go to the same primary, so a revoked token is visible
/// to every caller as soon as `save` returns.
#[derive(Clone)]
pub struct RedisTokenBlacklistRepository {
    pool: Arc<Pool>,
    timeout: Duration,
}

impl RedisTokenBlacklistRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate the Redis key for a blacklisted token.
    fn token_key(access_token: &str) -> String {
        format!("{KEY_PREFIX}{access_token}")
    }

    fn token_from_key(key: &str) -> Option<&str> {
        key.strip_prefix(KEY_PREFIX)
    }

    /// Helper to get a connection from the pool
    async fn get_conn(&self) -> Result<deadpool_redis::Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::StoreUnavailable(format!("Pool error: {}", e)))
    }

    async fn key_exists(&self, access_token: &str) -> Result<bool, StoreError> {
        let key = Self::token_key(access_token);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| StoreError::StoreUnavailable(e.to_string()))?;

        Ok(exists)
    }
}

#[async_trait]
impl KeyedEntityStore<BlacklistToken> for RedisTokenBlacklistRepository {
    async fn get(&self, key: &String) -> Result<BlacklistToken, StoreError> {
        bounded(self.timeout, "blacklist.get", async {
            if self.key_exists(key).await? {
                Ok(BlacklistToken::new(key.clone()))
            } else {
                Err(StoreError::NotFound)
            }
        })
        .await
    }

    /// ```text
    /// EXISTS auth:blacklist:token:{token}
    /// ```
    async fn exists_by_primary_key(&self, key: &String) -> Result<bool, StoreError> {
        bounded(self.timeout, "blacklist.exists", self.key_exists(key)).await
    }

    /// Walks the keyspace with `SCAN`; never blocks Redis the way `KEYS`
    /// would. Results are sorted by token.
    async fn find_all_where(&self, _filter: AllRecords) -> Result<Vec<BlacklistToken>, StoreError> {
        bounded(self.timeout, "blacklist.find_all", async {
            let mut conn = self.get_conn().await?;
            let pattern = format!("{KEY_PREFIX}*");
            let mut cursor: u64 = 0;
            let mut tokens = Vec::new();

            loop {
                let (next, keys): (u64, Vec<String>) = deadpool_redis::redis::cmd("SCAN")
                    .arg(cursor)
                    .arg("MATCH")
                    .arg(&pattern)
                    .arg("COUNT")
                    .arg(SCAN_BATCH)
                    .query_async(&mut *conn)
                    .await
                    .map_err(|e| StoreError::StoreUnavailable(e.to_string()))?;

                tokens.extend(
                    keys.iter()
                        .filter_map(|key| Self::token_from_key(key))
                        .map(BlacklistToken::new),
                );

                if next == 0 {
                    break;
                }
                cursor = next;
            }

            tokens.sort_by(|a, b| a.access_token().cmp(b.access_token()));
            tokens.dedup();
            Ok(tokens)
        })
        .await
    }

    /// ```text
    /// SET auth:blacklist:token:{token} "1"
    /// ```
    async fn save(&self, entity: BlacklistToken) -> Result<BlacklistToken, StoreError> {
        entity.validate()?;

        bounded(self.timeout, "blacklist.save", async {
            let key = Self::token_key(entity.access_token());
            let mut conn = self.get_conn().await?;

            let _: () = conn
                .set(&key, "1")
                .await
                .map_err(|e| StoreError::StoreUnavailable(e.to_string()))?;

            debug!(token = %entity.fingerprint(), "Token blacklisted in Redis");
            Ok(entity)
        })
        .await
    }

    /// Deleting an absent key is a no-op, so this is idempotent.
    async fn delete_by_primary_key(&self, key: &String) -> Result<(), StoreError> {
        bounded(self.timeout, "blacklist.delete", async {
            let mut conn = self.get_conn().await?;

            let _: u64 = conn
                .del(Self::token_key(key))
                .await
                .map_err(|e| StoreError::StoreUnavailable(e.to_string()))?;

            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::RedisTokenBlacklistRepository;
    use crate::auth::application::domain::entities::BlacklistToken;
    use crate::auth::application::ports::outgoing::TokenBlacklistRepository;
    use crate::store::application::ports::outgoing::{AllRecords, KeyedEntityStore, StoreError};
    use std::sync::{Arc, Once};
    use std::time::Duration;

    static TLS_INIT: Once = Once::new();

    fn init_tls() {
        TLS_INIT.call_once(|| {
            let _ = rustls::crypto::ring::default_provider().install_default();
        });
    }

    fn unique_token(label: &str) -> String {
        format!(
            "{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        )
    }

    /// Integration tests only run when `REDIS_URL` is set.
    fn setup_repo() -> Option<RedisTokenBlacklistRepository> {
        init_tls();
        crate::tests::support::load_test_env();
        let redis_url = match std::env::var("REDIS_URL") {
            Ok(v) => v,
            Err(_) => {
                eprintln!("REDIS_URL not set; skipping Redis integration test");
                return None;
            }
        };

        let redis_pool = deadpool_redis::Config::from_url(&redis_url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        Some(RedisTokenBlacklistRepository::new(Arc::new(redis_pool)))
    }

    // UNIT TESTS

    #[test]
    fn token_key_uses_blacklist_namespace() {
        assert_eq!(
            RedisTokenBlacklistRepository::token_key("abc"),
            "auth:blacklist:token:abc"
        );
        assert_eq!(
            RedisTokenBlacklistRepository::token_from_key("auth:blacklist:token:abc"),
            Some("abc")
        );
        assert_eq!(RedisTokenBlacklistRepository::token_from_key("other:abc"), None);
    }

    #[tokio::test]
    async fn blank_token_is_rejected_before_touching_redis() {
        // Nothing listens on this port; validation must fail first.
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let repo = RedisTokenBlacklistRepository::new(Arc::new(pool));

        let result = repo.save(BlacklistToken::new("")).await;

        assert!(matches!(result, Err(StoreError::InvalidEntity(_))));
    }

    #[tokio::test]
    async fn unreachable_redis_is_store_unavailable() {
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let repo = RedisTokenBlacklistRepository::new(Arc::new(pool))
            .with_timeout(Duration::from_millis(500));

        let result = repo.exists_by_access_token("abc").await;

        assert!(matches!(result, Err(StoreError::StoreUnavailable(_))));
    }

    // INTEGRATION TESTS

    #[tokio::test]
    async fn blacklisted_token_is_immediately_visible() {
        let Some(repo) = setup_repo() else { return };
        let token = unique_token("visible");

        repo.blacklist_token(&token).await.unwrap();

        assert!(repo.exists_by_access_token(&token).await.unwrap());
        assert_eq!(repo.get(&token).await.unwrap().access_token(), token);
    }

    #[tokio::test]
    async fn removed_token_is_no_longer_blacklisted() {
        let Some(repo) = setup_repo() else { return };
        let token = unique_token("removed");

        repo.blacklist_token(&token).await.unwrap();
        repo.remove_blacklisted_token(&token).await.unwrap();

        assert!(!repo.exists_by_access_token(&token).await.unwrap());
        assert_eq!(repo.get(&token).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn removing_unknown_token_is_noop() {
        let Some(repo) = setup_repo() else { return };

        let result = repo.remove_blacklisted_token(&unique_token("absent")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn find_all_lists_blacklisted_tokens() {
        let Some(repo) = setup_repo() else { return };
        let token = unique_token("listed");

        repo.blacklist_token(&token).await.unwrap();
        let all = repo.find_all_where(AllRecords).await.unwrap();

        assert!(all.iter().any(|t| t.access_token() == token));
        repo.remove_blacklisted_token(&token).await.unwrap();
    }
}
