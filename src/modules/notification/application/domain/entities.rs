use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::store::application::domain::{EntityId, UserId};
use crate::store::application::ports::outgoing::{
    AllRecords, StoreError, StoredEntity, UserOwned,
};

pub const MIN_DISCOUNT_PERCENT: i32 = 0;
pub const MAX_DISCOUNT_PERCENT: i32 = 100;

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(21, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Per-user notification settings. At most one record per user.
///
/// The start/end window may wrap past midnight (e.g. 22:00 to 06:00), so no
/// ordering between the two times is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub id: Option<EntityId>,
    pub user_id: UserId,
    pub push_notifications: bool,
    pub notification_start_time: NaiveTime,
    pub notification_end_time: NaiveTime,
    pub weekend_notifications: bool,
    pub min_discount_percent: i32,
}

impl NotificationSettings {
    /// What a user without a stored record gets.
    pub fn defaults_for(user_id: UserId) -> Self {
        Self {
            id: None,
            user_id,
            push_notifications: true,
            notification_start_time: default_start_time(),
            notification_end_time: default_end_time(),
            weekend_notifications: false,
            min_discount_percent: MIN_DISCOUNT_PERCENT,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Conjunction of optional field predicates; an empty filter matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettingsFilter {
    pub push_notifications: Option<bool>,
    pub weekend_notifications: Option<bool>,
    /// Keep records whose `min_discount_percent` is at most this value.
    pub max_min_discount_percent: Option<i32>,
}

impl NotificationSettingsFilter {
    pub fn push_enabled() -> Self {
        Self {
            push_notifications: Some(true),
            ..Default::default()
        }
    }

    pub fn with_weekend_notifications(mut self, enabled: bool) -> Self {
        self.weekend_notifications = Some(enabled);
        self
    }

    pub fn accepting_discount(mut self, percent: i32) -> Self {
        self.max_min_discount_percent = Some(percent);
        self
    }
}

impl StoredEntity for NotificationSettings {
    type Key = EntityId;
    type Filter = NotificationSettingsFilter;

    fn primary_key(&self) -> Option<EntityId> {
        self.id
    }

    fn set_primary_key(&mut self, key: EntityId) {
        self.id = Some(key);
    }

    fn user_id(&self) -> Option<UserId> {
        Some(self.user_id)
    }

    fn matches(&self, filter: &NotificationSettingsFilter) -> bool {
        filter
            .push_notifications
            .map_or(true, |push| self.push_notifications == push)
            && filter
                .weekend_notifications
                .map_or(true, |weekend| self.weekend_notifications == weekend)
            && filter
                .max_min_discount_percent
                .map_or(true, |max| self.min_discount_percent <= max)
    }

    fn validate(&self) -> Result<(), StoreError> {
        if !(MIN_DISCOUNT_PERCENT..=MAX_DISCOUNT_PERCENT).contains(&self.min_discount_percent) {
            return Err(StoreError::InvalidEntity(format!(
                "min_discount_percent must be between {MIN_DISCOUNT_PERCENT} and {MAX_DISCOUNT_PERCENT}, got {}",
                self.min_discount_percent
            )));
        }
        Ok(())
    }
}

impl UserOwned for NotificationSettings {}

/// Per-user preference record. Only identity and ownership are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    pub id: Option<EntityId>,
    pub user_id: UserId,
}

impl UserPreference {
    pub fn new(user_id: UserId) -> Self {
        Self { id: None, user_id }
    }
}

impl StoredEntity for UserPreference {
    type Key = EntityId;
    type Filter = AllRecords;

    fn primary_key(&self) -> Option<EntityId> {
        self.id
    }

    fn set_primary_key(&mut self, key: EntityId) {
        self.id = Some(key);
    }

    fn user_id(&self) -> Option<UserId> {
        Some(self.user_id)
    }

    fn matches(&self, _filter: &AllRecords) -> bool {
        true
    }
}

impl UserOwned for UserPreference {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::adapter::outgoing::InMemoryStore;
    use crate::store::application::ports::outgoing::{KeyedEntityStore, UserKeyedStore};

    fn settings(push: bool, weekend: bool, min_discount: i32) -> NotificationSettings {
        NotificationSettings {
            push_notifications: push,
            weekend_notifications: weekend,
            min_discount_percent: min_discount,
            ..NotificationSettings::defaults_for(UserId::from(1))
        }
    }

    #[test]
    fn defaults_are_unpersisted_and_valid() {
        let defaults = NotificationSettings::defaults_for(UserId::from(8));

        assert!(!defaults.is_persisted());
        assert_eq!(defaults.user_id, UserId::from(8));
        assert!(defaults.push_notifications);
        assert_eq!(
            defaults.notification_start_time,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            defaults.notification_end_time,
            NaiveTime::from_hms_opt(21, 0, 0).unwrap()
        );
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = NotificationSettingsFilter::default();

        assert!(settings(true, true, 50).matches(&filter));
        assert!(settings(false, false, 0).matches(&filter));
    }

    #[test]
    fn push_filter_excludes_push_disabled() {
        let filter = NotificationSettingsFilter::push_enabled();

        assert!(settings(true, false, 0).matches(&filter));
        assert!(!settings(false, false, 0).matches(&filter));
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filter = NotificationSettingsFilter::push_enabled()
            .with_weekend_notifications(true)
            .accepting_discount(20);

        assert!(settings(true, true, 20).matches(&filter));
        assert!(!settings(true, true, 25).matches(&filter));
        assert!(!settings(true, false, 10).matches(&filter));
    }

    #[test]
    fn discount_percent_out_of_range_is_invalid() {
        assert!(matches!(
            settings(true, false, 101).validate(),
            Err(StoreError::InvalidEntity(_))
        ));
        assert!(matches!(
            settings(true, false, -1).validate(),
            Err(StoreError::InvalidEntity(_))
        ));
        assert!(settings(true, false, 100).validate().is_ok());
    }

    #[test]
    fn preference_is_keyed_by_user() {
        let preference = UserPreference::new(UserId::from(3));

        assert_eq!(preference.primary_key(), None);
        assert_eq!(preference.user_id(), Some(UserId::from(3)));
    }

    #[tokio::test]
    async fn second_settings_for_same_user_is_rejected() {
        let store = InMemoryStore::<NotificationSettings>::new();
        let first = store
            .save(NotificationSettings::defaults_for(UserId::from(7)))
            .await
            .unwrap();

        let second = NotificationSettings {
            push_notifications: false,
            ..NotificationSettings::defaults_for(UserId::from(7))
        };
        let result = store.save(second).await;

        assert!(matches!(
            result,
            Err(StoreError::UniqueConstraintViolation(_))
        ));
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.find_by_user_id(UserId::from(7)).await.unwrap(),
            Some(first)
        );
    }

    #[tokio::test]
    async fn second_preference_for_same_user_is_rejected() {
        let store = InMemoryStore::<UserPreference>::new();
        store.save(UserPreference::new(UserId::from(7))).await.unwrap();

        let result = store.save(UserPreference::new(UserId::from(7))).await;

        assert!(matches!(
            result,
            Err(StoreError::UniqueConstraintViolation(_))
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn push_enabled_query_without_matches_is_empty() {
        let store = InMemoryStore::<NotificationSettings>::new();
        store.save(settings(false, true, 0)).await.unwrap();

        let recipients = store
            .find_all_where(NotificationSettingsFilter::push_enabled())
            .await
            .unwrap();

        assert!(recipients.is_empty());
    }
}
