use async_trait::async_trait;

use crate::notification::application::domain::UserPreference;
use crate::store::application::domain::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnsureUserPreferenceError {
    #[error("Failed to load user preference: {0}")]
    RepositoryError(String),
}

/// Return the user's preference record, creating it on first use.
#[async_trait]
pub trait EnsureUserPreferenceUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserPreference, EnsureUserPreferenceError>;
}
