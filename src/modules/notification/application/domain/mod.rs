pub mod dto;
pub mod entities;

pub use dto::{NotificationSettingsDto, PriceChangeRequest, SettingsDtoError, UserDto};
pub use entities::{NotificationSettings, NotificationSettingsFilter, UserPreference};
