use async_trait::async_trait;

use crate::notification::application::domain::{NotificationSettingsDto, UserDto};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportNotificationSettingsError {
    #[error("Failed to load notification settings: {0}")]
    RepositoryError(String),
}

/// Build the cross-service settings payload for a user; users without a
/// stored record export the defaults.
#[async_trait]
pub trait ExportNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserDto,
    ) -> Result<NotificationSettingsDto, ExportNotificationSettingsError>;
}
