use async_trait::async_trait;

use crate::auth::application::domain::entities::BlacklistToken;
use crate::store::application::ports::outgoing::{KeyedEntityStore, StoreError};

/// Token blacklist port.
///
/// Any `KeyedEntityStore<BlacklistToken>` is a blacklist; this trait only
/// adds the token-shaped entry points the auth flow calls.
#[async_trait]
pub trait TokenBlacklistRepository: KeyedEntityStore<BlacklistToken> {
    /// Called on every authenticated request. Must observe the latest
    /// `blacklist_token` from any caller.
    async fn exists_by_access_token(&self, access_token: &str) -> Result<bool, StoreError> {
        self.exists_by_primary_key(&access_token.to_string()).await
    }

    async fn blacklist_token(&self, access_token: &str) -> Result<BlacklistToken, StoreError> {
        self.save(BlacklistToken::new(access_token)).await
    }

    async fn remove_blacklisted_token(&self, access_token: &str) -> Result<(), StoreError> {
        self.delete_by_primary_key(&access_token.to_string()).await
    }
}

impl<S> TokenBlacklistRepository for S where S: KeyedEntityStore<BlacklistToken> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::adapter::outgoing::InMemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn blacklisted_token_exists_until_removed() {
        let repo = InMemoryStore::<BlacklistToken>::new();

        repo.blacklist_token("revoked-1").await.unwrap();
        assert!(repo.exists_by_access_token("revoked-1").await.unwrap());

        repo.remove_blacklisted_token("revoked-1").await.unwrap();
        assert!(!repo.exists_by_access_token("revoked-1").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_token_is_not_blacklisted() {
        let repo = InMemoryStore::<BlacklistToken>::new();

        assert!(!repo.exists_by_access_token("never-seen").await.unwrap());
    }

    #[tokio::test]
    async fn blacklisting_twice_keeps_one_record() {
        let repo = InMemoryStore::<BlacklistToken>::new();

        repo.blacklist_token("dup").await.unwrap();
        repo.blacklist_token("dup").await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn works_through_a_shared_trait_object() {
        let repo: Arc<dyn KeyedEntityStore<BlacklistToken>> =
            Arc::new(InMemoryStore::<BlacklistToken>::new());

        repo.blacklist_token("shared").await.unwrap();

        assert!(repo.exists_by_access_token("shared").await.unwrap());
    }
}
