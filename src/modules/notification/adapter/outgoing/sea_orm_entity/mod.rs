pub mod notification_settings;
pub mod user_preferences;
