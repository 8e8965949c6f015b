mod delete_user_notification_data_service;
mod ensure_user_preference_service;
mod export_notification_settings_service;
mod get_notification_settings_service;
mod select_broadcast_recipients_service;
mod update_notification_settings_service;

pub use delete_user_notification_data_service::DeleteUserNotificationDataService;
pub use ensure_user_preference_service::EnsureUserPreferenceService;
pub use export_notification_settings_service::ExportNotificationSettingsService;
pub use get_notification_settings_service::GetNotificationSettingsService;
pub use select_broadcast_recipients_service::SelectBroadcastRecipientsService;
pub use update_notification_settings_service::UpdateNotificationSettingsService;
