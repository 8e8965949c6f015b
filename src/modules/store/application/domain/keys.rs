use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identifier of a user. Users are owned by the user service; here the id
/// is only ever used as the unique secondary key of per-user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned numeric primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A primary key type a store can hold.
///
/// Keys that the store is allowed to generate (numeric sequences) override
/// `from_sequence`; natural keys such as access tokens keep the default and
/// must always arrive populated.
pub trait StoreKey: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn from_sequence(_sequence: i64) -> Option<Self> {
        None
    }
}

impl StoreKey for EntityId {
    fn from_sequence(sequence: i64) -> Option<Self> {
        Some(Self(sequence))
    }
}

impl StoreKey for String {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_round_trips_through_i64() {
        let id = UserId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&EntityId::from(7)).unwrap();
        assert_eq!(json, "7");

        let back: UserId = serde_json::from_str("9").unwrap();
        assert_eq!(back, UserId::from(9));
    }

    #[test]
    fn only_numeric_keys_are_generated() {
        assert_eq!(EntityId::from_sequence(3), Some(EntityId::from(3)));
        assert_eq!(String::from_sequence(3), None);
    }
}
