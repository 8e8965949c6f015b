mod delete_user_notification_data_use_case;
mod ensure_user_preference_use_case;
mod export_notification_settings_use_case;
mod get_notification_settings_use_case;
mod select_broadcast_recipients_use_case;
mod update_notification_settings_use_case;

pub use delete_user_notification_data_use_case::{
    DeleteUserNotificationDataError, DeleteUserNotificationDataUseCase, DeletedNotificationData,
};
pub use ensure_user_preference_use_case::{EnsureUserPreferenceError, EnsureUserPreferenceUseCase};
pub use export_notification_settings_use_case::{
    ExportNotificationSettingsError, ExportNotificationSettingsUseCase,
};
pub use get_notification_settings_use_case::{
    GetNotificationSettingsError, GetNotificationSettingsUseCase,
};
pub use select_broadcast_recipients_use_case::{
    SelectBroadcastRecipientsError, SelectBroadcastRecipientsUseCase,
};
pub use update_notification_settings_use_case::{
    UpdateNotificationSettingsCommand, UpdateNotificationSettingsCommandError,
    UpdateNotificationSettingsError, UpdateNotificationSettingsUseCase,
};
