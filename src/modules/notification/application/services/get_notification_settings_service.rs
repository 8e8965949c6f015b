use async_trait::async_trait;
use tracing::debug;

use crate::notification::application::domain::NotificationSettings;
use crate::notification::application::ports::{
    incoming::use_cases::{GetNotificationSettingsError, GetNotificationSettingsUseCase},
    outgoing::NotificationSettingsRepository,
};
use crate::store::application::domain::UserId;

#[derive(Debug, Clone)]
pub struct GetNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> GetNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetNotificationSettingsUseCase for GetNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<NotificationSettings, GetNotificationSettingsError> {
        let stored = self
            .repository
            .find_by_user_id(user_id)
            .await
            .map_err(|e| GetNotificationSettingsError::RepositoryError(e.to_string()))?;

        Ok(stored.unwrap_or_else(|| {
            debug!(user_id = %user_id, "No stored notification settings; using defaults");
            NotificationSettings::defaults_for(user_id)
        }))
    }
}
