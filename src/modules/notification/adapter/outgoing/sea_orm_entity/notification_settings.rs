use chrono::NaiveTime;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::notification::application::domain::NotificationSettings;
use crate::store::application::domain::{EntityId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub user_id: i64,

    pub push_notifications: bool,

    pub notification_start_time: NaiveTime,

    pub notification_end_time: NaiveTime,

    pub weekend_notifications: bool,

    pub min_discount_percent: i32,
}

impl Model {
    pub fn to_domain(&self) -> NotificationSettings {
        NotificationSettings {
            id: Some(EntityId::from(self.id)),
            user_id: UserId::from(self.user_id),
            push_notifications: self.push_notifications,
            notification_start_time: self.notification_start_time,
            notification_end_time: self.notification_end_time,
            weekend_notifications: self.weekend_notifications,
            min_discount_percent: self.min_discount_percent,
        }
    }
}

impl From<&NotificationSettings> for ActiveModel {
    /// An unsaved entity leaves `id` unset so the database assigns it.
    fn from(settings: &NotificationSettings) -> Self {
        Self {
            id: settings.id.map_or(NotSet, |id| Set(id.value())),
            user_id: Set(settings.user_id.value()),
            push_notifications: Set(settings.push_notifications),
            notification_start_time: Set(settings.notification_start_time),
            notification_end_time: Set(settings.notification_end_time),
            weekend_notifications: Set(settings.weekend_notifications),
            min_discount_percent: Set(settings.min_discount_percent),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
