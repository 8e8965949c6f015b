use crate::notification::application::domain::UserPreference;
use crate::store::application::ports::outgoing::UserKeyedStore;

/// User preference store: keyed by id, unique by user.
pub trait UserPreferenceRepository: UserKeyedStore<UserPreference> {}

impl<S> UserPreferenceRepository for S where S: UserKeyedStore<UserPreference> + ?Sized {}
