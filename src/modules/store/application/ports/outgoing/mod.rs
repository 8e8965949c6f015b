mod keyed_entity_store;
mod store_error;

pub use keyed_entity_store::{
    AllRecords, KeyedEntityStore, StoredEntity, UserKeyedStore, UserOwned,
};
pub use store_error::StoreError;
