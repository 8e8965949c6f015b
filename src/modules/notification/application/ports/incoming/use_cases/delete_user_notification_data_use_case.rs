use async_trait::async_trait;

use crate::store::application::domain::UserId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedNotificationData {
    pub settings_removed: u64,
    pub preferences_removed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteUserNotificationDataError {
    #[error("Failed to delete notification data: {0}")]
    RepositoryError(String),
}

/// Explicit cascade when a user is deleted. Safe to repeat.
#[async_trait]
pub trait DeleteUserNotificationDataUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<DeletedNotificationData, DeleteUserNotificationDataError>;
}
