use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entities::NotificationSettings;
use crate::store::application::domain::UserId;

/// User snapshot sent by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Notification settings joined with the owning user, as exchanged between
/// the user domain and the notification domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsDto {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub push_notifications: bool,
    pub notification_start_time: NaiveTime,
    pub notification_end_time: NaiveTime,
    pub weekend_notifications: bool,
    pub min_discount_percent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsDtoError {
    #[error("Settings belong to user {settings_user}, not user {user}")]
    UserMismatch { settings_user: UserId, user: UserId },
}

impl NotificationSettingsDto {
    pub fn from_parts(
        settings: &NotificationSettings,
        user: &UserDto,
    ) -> Result<Self, SettingsDtoError> {
        if settings.user_id != user.id {
            return Err(SettingsDtoError::UserMismatch {
                settings_user: settings.user_id,
                user: user.id,
            });
        }

        Ok(Self {
            user_id: settings.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            push_notifications: settings.push_notifications,
            notification_start_time: settings.notification_start_time,
            notification_end_time: settings.notification_end_time,
            weekend_notifications: settings.weekend_notifications,
            min_discount_percent: settings.min_discount_percent,
        })
    }
}

/// Price change event published by the product side. Prices travel as
/// decimal strings so no precision is lost on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChangeRequest {
    pub product_id: i64,
    pub product_name: String,
    pub old_price: Decimal,
    pub new_price: Decimal,
}
