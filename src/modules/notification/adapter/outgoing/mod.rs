mod notification_settings_postgres;
pub mod sea_orm_entity;
mod user_preference_postgres;

pub use notification_settings_postgres::NotificationSettingsPostgres;
pub use user_preference_postgres::UserPreferencePostgres;
