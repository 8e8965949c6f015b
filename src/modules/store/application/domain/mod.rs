mod keys;

pub use keys::{EntityId, StoreKey, UserId};
