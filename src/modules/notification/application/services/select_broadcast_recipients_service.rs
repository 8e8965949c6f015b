use async_trait::async_trait;
use tracing::debug;

use crate::notification::application::domain::{NotificationSettings, NotificationSettingsFilter};
use crate::notification::application::ports::{
    incoming::use_cases::{SelectBroadcastRecipientsError, SelectBroadcastRecipientsUseCase},
    outgoing::NotificationSettingsRepository,
};

#[derive(Debug, Clone)]
pub struct SelectBroadcastRecipientsService<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> SelectBroadcastRecipientsService<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SelectBroadcastRecipientsUseCase for SelectBroadcastRecipientsService<R>
where
    R: NotificationSettingsRepository,
{
    async fn execute(
        &self,
        filter: NotificationSettingsFilter,
    ) -> Result<Vec<NotificationSettings>, SelectBroadcastRecipientsError> {
        // Users who turned push off never receive a broadcast
        let filter = NotificationSettingsFilter {
            push_notifications: Some(true),
            ..filter
        };

        let recipients = self
            .repository
            .find_all_where(filter)
            .await
            .map_err(|e| SelectBroadcastRecipientsError::RepositoryError(e.to_string()))?;

        debug!(count = recipients.len(), "Selected broadcast recipients");
        Ok(recipients)
    }
}
