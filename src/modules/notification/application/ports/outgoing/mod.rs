mod notification_settings_repository;
mod user_preference_repository;

pub use notification_settings_repository::NotificationSettingsRepository;
pub use user_preference_repository::UserPreferenceRepository;
