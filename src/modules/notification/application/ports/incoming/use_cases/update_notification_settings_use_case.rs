use async_trait::async_trait;
use chrono::NaiveTime;

use crate::notification::application::domain::entities::{
    MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT,
};
use crate::notification::application::domain::NotificationSettings;
use crate::store::application::domain::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotificationSettingsCommand {
    user_id: UserId,
    push_notifications: bool,
    notification_start_time: NaiveTime,
    notification_end_time: NaiveTime,
    weekend_notifications: bool,
    min_discount_percent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateNotificationSettingsCommandError {
    #[error("Minimum discount must be between 0 and 100, got {0}")]
    DiscountOutOfRange(i32),
}

impl UpdateNotificationSettingsCommand {
    pub fn new(
        user_id: UserId,
        push_notifications: bool,
        notification_start_time: NaiveTime,
        notification_end_time: NaiveTime,
        weekend_notifications: bool,
        min_discount_percent: i32,
    ) -> Result<Self, UpdateNotificationSettingsCommandError> {
        if !(MIN_DISCOUNT_PERCENT..=MAX_DISCOUNT_PERCENT).contains(&min_discount_percent) {
            return Err(UpdateNotificationSettingsCommandError::DiscountOutOfRange(
                min_discount_percent,
            ));
        }

        Ok(Self {
            user_id,
            push_notifications,
            notification_start_time,
            notification_end_time,
            weekend_notifications,
            min_discount_percent,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Apply the command on top of an existing record (or defaults),
    /// keeping its primary key.
    pub fn apply_to(&self, mut settings: NotificationSettings) -> NotificationSettings {
        settings.user_id = self.user_id;
        settings.push_notifications = self.push_notifications;
        settings.notification_start_time = self.notification_start_time;
        settings.notification_end_time = self.notification_end_time;
        settings.weekend_notifications = self.weekend_notifications;
        settings.min_discount_percent = self.min_discount_percent;
        settings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateNotificationSettingsError {
    #[error("Invalid notification settings: {0}")]
    InvalidSettings(String),

    #[error("Notification settings were created concurrently for this user")]
    Conflict,

    #[error("Failed to save notification settings: {0}")]
    RepositoryError(String),
}

/// Insert-or-update the settings of one user.
#[async_trait]
pub trait UpdateNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateNotificationSettingsCommand,
    ) -> Result<NotificationSettings, UpdateNotificationSettingsError>;
}
