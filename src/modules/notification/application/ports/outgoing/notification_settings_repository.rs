use crate::notification::application::domain::NotificationSettings;
use crate::store::application::ports::outgoing::UserKeyedStore;

/// Notification settings store: keyed by id, unique by user.
pub trait NotificationSettingsRepository: UserKeyedStore<NotificationSettings> {}

impl<S> NotificationSettingsRepository for S where S: UserKeyedStore<NotificationSettings> + ?Sized {}
