use std::sync::Arc;

use crate::auth::application::ports::outgoing::TokenBlacklistRepository;
use crate::auth::application::use_cases::{
    revoke_token::{IRevokeTokenUseCase, RevokeTokenUseCase},
    verify_token::{IVerifyTokenUseCase, VerifyTokenUseCase},
};
use crate::notification::application::ports::incoming::use_cases::{
    DeleteUserNotificationDataUseCase, EnsureUserPreferenceUseCase,
    ExportNotificationSettingsUseCase, GetNotificationSettingsUseCase,
    SelectBroadcastRecipientsUseCase, UpdateNotificationSettingsUseCase,
};
use crate::notification::application::ports::outgoing::{
    NotificationSettingsRepository, UserPreferenceRepository,
};
use crate::notification::application::services::{
    DeleteUserNotificationDataService, EnsureUserPreferenceService,
    ExportNotificationSettingsService, GetNotificationSettingsService,
    SelectBroadcastRecipientsService, UpdateNotificationSettingsService,
};

/// Use cases shared with request handlers.
#[derive(Clone)]
pub struct AppState {
    pub revoke_token_use_case: Arc<dyn IRevokeTokenUseCase>,
    pub verify_token_use_case: Arc<dyn IVerifyTokenUseCase>,
    pub get_notification_settings_use_case: Arc<dyn GetNotificationSettingsUseCase>,
    pub update_notification_settings_use_case: Arc<dyn UpdateNotificationSettingsUseCase>,
    pub delete_user_notification_data_use_case: Arc<dyn DeleteUserNotificationDataUseCase>,
    pub select_broadcast_recipients_use_case: Arc<dyn SelectBroadcastRecipientsUseCase>,
    pub ensure_user_preference_use_case: Arc<dyn EnsureUserPreferenceUseCase>,
    pub export_notification_settings_use_case: Arc<dyn ExportNotificationSettingsUseCase>,
}

impl AppState {
    pub fn new<B, S, P>(blacklist: B, settings: S, preferences: P) -> Self
    where
        B: TokenBlacklistRepository + Clone + 'static,
        S: NotificationSettingsRepository + Clone + 'static,
        P: UserPreferenceRepository + Clone + 'static,
    {
        Self {
            revoke_token_use_case: Arc::new(RevokeTokenUseCase::new(blacklist.clone())),
            verify_token_use_case: Arc::new(VerifyTokenUseCase::new(blacklist)),
            get_notification_settings_use_case: Arc::new(GetNotificationSettingsService::new(
                settings.clone(),
            )),
            update_notification_settings_use_case: Arc::new(
                UpdateNotificationSettingsService::new(settings.clone()),
            ),
            delete_user_notification_data_use_case: Arc::new(
                DeleteUserNotificationDataService::new(settings.clone(), preferences.clone()),
            ),
            select_broadcast_recipients_use_case: Arc::new(SelectBroadcastRecipientsService::new(
                settings.clone(),
            )),
            ensure_user_preference_use_case: Arc::new(EnsureUserPreferenceService::new(
                preferences,
            )),
            export_notification_settings_use_case: Arc::new(
                ExportNotificationSettingsService::new(settings),
            ),
        }
    }
}
