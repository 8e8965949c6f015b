use async_trait::async_trait;
use tracing::info;

use crate::notification::application::ports::{
    incoming::use_cases::{
        DeleteUserNotificationDataError, DeleteUserNotificationDataUseCase,
        DeletedNotificationData,
    },
    outgoing::{NotificationSettingsRepository, UserPreferenceRepository},
};
use crate::store::application::domain::UserId;

/// Removes everything the notification domain keeps about a user. There is
/// no foreign key to the users table, so this runs when a user is deleted.
#[derive(Debug, Clone)]
pub struct DeleteUserNotificationDataService<S, P>
where
    S: NotificationSettingsRepository,
    P: UserPreferenceRepository,
{
    settings: S,
    preferences: P,
}

impl<S, P> DeleteUserNotificationDataService<S, P>
where
    S: NotificationSettingsRepository,
    P: UserPreferenceRepository,
{
    pub fn new(settings: S, preferences: P) -> Self {
        Self {
            settings,
            preferences,
        }
    }
}

#[async_trait]
impl<S, P> DeleteUserNotificationDataUseCase for DeleteUserNotificationDataService<S, P>
where
    S: NotificationSettingsRepository,
    P: UserPreferenceRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<DeletedNotificationData, DeleteUserNotificationDataError> {
        let settings_removed = self
            .settings
            .delete_by_user_id(user_id)
            .await
            .map_err(|e| DeleteUserNotificationDataError::RepositoryError(e.to_string()))?;

        let preferences_removed = self
            .preferences
            .delete_by_user_id(user_id)
            .await
            .map_err(|e| DeleteUserNotificationDataError::RepositoryError(e.to_string()))?;

        info!(
            user_id = %user_id,
            settings_removed,
            preferences_removed,
            "Deleted user notification data"
        );

        Ok(DeletedNotificationData {
            settings_removed,
            preferences_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::domain::{NotificationSettings, UserPreference};
    use crate::store::adapter::outgoing::InMemoryStore;
    use crate::store::application::ports::outgoing::{KeyedEntityStore, UserKeyedStore};
    use crate::tests::support::fixtures::settings_for;
    use crate::tests::support::stubs::UnavailableStore;

    #[tokio::test]
    async fn removes_settings_and_preference() {
        let settings = InMemoryStore::<NotificationSettings>::new();
        let preferences = InMemoryStore::<UserPreference>::new();
        settings.save(settings_for(3, true, false)).await.unwrap();
        settings.save(settings_for(4, true, false)).await.unwrap();
        preferences.save(UserPreference::new(UserId::from(3))).await.unwrap();

        let service = DeleteUserNotificationDataService::new(settings.clone(), preferences.clone());

        let removed = service.execute(UserId::from(3)).await.unwrap();

        assert_eq!(
            removed,
            DeletedNotificationData {
                settings_removed: 1,
                preferences_removed: 1,
            }
        );
        assert!(!settings.exists_by_user_id(UserId::from(3)).await.unwrap());
        assert!(settings.exists_by_user_id(UserId::from(4)).await.unwrap());
        assert!(preferences.is_empty().await);
    }

    #[tokio::test]
    async fn repeating_the_delete_removes_nothing() {
        let service = DeleteUserNotificationDataService::new(
            InMemoryStore::<NotificationSettings>::new(),
            InMemoryStore::<UserPreference>::new(),
        );

        let removed = service.execute(UserId::from(3)).await.unwrap();

        assert_eq!(removed, DeletedNotificationData::default());
    }

    #[tokio::test]
    async fn preference_store_failure_is_reported() {
        let service = DeleteUserNotificationDataService::new(
            InMemoryStore::<NotificationSettings>::new(),
            UnavailableStore,
        );

        let result = service.execute(UserId::from(3)).await;

        assert!(matches!(
            result,
            Err(DeleteUserNotificationDataError::RepositoryError(_))
        ));
    }
}
