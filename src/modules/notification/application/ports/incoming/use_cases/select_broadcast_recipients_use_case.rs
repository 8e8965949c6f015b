use async_trait::async_trait;

use crate::notification::application::domain::{NotificationSettings, NotificationSettingsFilter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectBroadcastRecipientsError {
    #[error("Failed to select recipients: {0}")]
    RepositoryError(String),
}

/// Settings of every user that accepts push notifications and matches the
/// extra conditions in `filter`.
#[async_trait]
pub trait SelectBroadcastRecipientsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: NotificationSettingsFilter,
    ) -> Result<Vec<NotificationSettings>, SelectBroadcastRecipientsError>;
}
