use async_trait::async_trait;

use crate::notification::application::domain::{
    NotificationSettings, NotificationSettingsDto, UserDto,
};
use crate::notification::application::ports::{
    incoming::use_cases::{ExportNotificationSettingsError, ExportNotificationSettingsUseCase},
    outgoing::NotificationSettingsRepository,
};

#[derive(Debug, Clone)]
pub struct ExportNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> ExportNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ExportNotificationSettingsUseCase for ExportNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    async fn execute(
        &self,
        user: UserDto,
    ) -> Result<NotificationSettingsDto, ExportNotificationSettingsError> {
        let settings = self
            .repository
            .find_by_user_id(user.id)
            .await
            .map_err(|e| ExportNotificationSettingsError::RepositoryError(e.to_string()))?
            .unwrap_or_else(|| NotificationSettings::defaults_for(user.id));

        // Looked up by user.id, so the owners always agree
        NotificationSettingsDto::from_parts(&settings, &user)
            .map_err(|e| ExportNotificationSettingsError::RepositoryError(e.to_string()))
    }
}
