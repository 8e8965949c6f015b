use chrono::NaiveTime;

use crate::notification::application::domain::{NotificationSettings, UserDto};
use crate::store::application::domain::UserId;

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Unsaved settings for `user_id` with the given push/weekend flags.
pub fn settings_for(user_id: i64, push: bool, weekend: bool) -> NotificationSettings {
    NotificationSettings {
        push_notifications: push,
        weekend_notifications: weekend,
        ..NotificationSettings::defaults_for(UserId::from(user_id))
    }
}

pub fn user_dto(id: i64) -> UserDto {
    UserDto {
        id: UserId::from(id),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
    }
}
