use async_trait::async_trait;

use crate::notification::application::domain::NotificationSettings;
use crate::store::application::domain::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetNotificationSettingsError {
    #[error("Failed to load notification settings: {0}")]
    RepositoryError(String),
}

/// Stored settings for the user, or the defaults when none exist yet.
#[async_trait]
pub trait GetNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<NotificationSettings, GetNotificationSettingsError>;
}
