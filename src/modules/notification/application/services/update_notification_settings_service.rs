use async_trait::async_trait;
use tracing::{info, warn};

use crate::notification::application::domain::NotificationSettings;
use crate::notification::application::ports::{
    incoming::use_cases::{
        UpdateNotificationSettingsCommand, UpdateNotificationSettingsError,
        UpdateNotificationSettingsUseCase,
    },
    outgoing::NotificationSettingsRepository,
};
use crate::store::application::ports::outgoing::StoreError;

#[derive(Debug, Clone)]
pub struct UpdateNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> UpdateNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_store_error(error: StoreError) -> UpdateNotificationSettingsError {
    match error {
        StoreError::UniqueConstraintViolation(_) => UpdateNotificationSettingsError::Conflict,
        StoreError::InvalidEntity(msg) => UpdateNotificationSettingsError::InvalidSettings(msg),
        other => UpdateNotificationSettingsError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateNotificationSettingsUseCase for UpdateNotificationSettingsService<R>
where
    R: NotificationSettingsRepository,
{
    async fn execute(
        &self,
        command: UpdateNotificationSettingsCommand,
    ) -> Result<NotificationSettings, UpdateNotificationSettingsError> {
        let user_id = command.user_id();

        let current = self
            .repository
            .find_by_user_id(user_id)
            .await
            .map_err(map_store_error)?
            .unwrap_or_else(|| NotificationSettings::defaults_for(user_id));

        let created = !current.is_persisted();
        let saved = self
            .repository
            .save(command.apply_to(current))
            .await
            .map_err(|e| {
                warn!(user_id = %user_id, error = %e, "Failed to save notification settings");
                map_store_error(e)
            })?;

        info!(user_id = %user_id, created, "Notification settings saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::adapter::outgoing::InMemoryStore;
    use crate::store::application::domain::UserId;
    use crate::store::application::ports::outgoing::{KeyedEntityStore, UserKeyedStore};
    use crate::tests::support::fixtures::{settings_for, time};
    use crate::tests::support::stubs::UnavailableStore;

    fn command(user_id: i64, push: bool, min_discount: i32) -> UpdateNotificationSettingsCommand {
        UpdateNotificationSettingsCommand::new(
            UserId::from(user_id),
            push,
            time(8, 0),
            time(22, 30),
            true,
            min_discount,
        )
        .unwrap()
    }

    #[test]
    fn command_rejects_discount_out_of_range() {
        let result = UpdateNotificationSettingsCommand::new(
            UserId::from(1),
            true,
            time(9, 0),
            time(21, 0),
            false,
            120,
        );

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn first_update_creates_settings() {
        let store = InMemoryStore::<NotificationSettings>::new();
        let service = UpdateNotificationSettingsService::new(store.clone());

        let saved = service.execute(command(4, false, 15)).await.unwrap();

        assert!(saved.is_persisted());
        assert!(!saved.push_notifications);
        assert_eq!(saved.min_discount_percent, 15);
        assert_eq!(saved.notification_end_time, time(22, 30));
        assert!(store.exists_by_user_id(UserId::from(4)).await.unwrap());
    }

    #[tokio::test]
    async fn later_update_keeps_the_same_record() {
        let store = InMemoryStore::<NotificationSettings>::new();
        let existing = store.save(settings_for(4, true, false)).await.unwrap();
        let service = UpdateNotificationSettingsService::new(store.clone());

        let saved = service.execute(command(4, false, 40)).await.unwrap();

        assert_eq!(saved.id, existing.id);
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(&existing.id.unwrap()).await.unwrap().min_discount_percent,
            40
        );
    }

    #[tokio::test]
    async fn store_failure_is_mapped() {
        let service = UpdateNotificationSettingsService::new(UnavailableStore);

        let result = service.execute(command(1, true, 0)).await;

        assert!(matches!(
            result,
            Err(UpdateNotificationSettingsError::RepositoryError(_))
        ));
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        assert_eq!(
            map_store_error(StoreError::UniqueConstraintViolation("user_id".into())),
            UpdateNotificationSettingsError::Conflict
        );
    }
}
