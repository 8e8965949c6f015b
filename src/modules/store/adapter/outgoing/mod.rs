mod db_error;
mod in_memory_store;
mod sequence;
mod timeout;

pub use db_error::map_db_err;
pub use in_memory_store::InMemoryStore;
pub use sequence::advance_id_sequence;
pub use timeout::{bounded, DEFAULT_STORE_TIMEOUT};
