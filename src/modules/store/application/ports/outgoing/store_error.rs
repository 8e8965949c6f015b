/// Failures surfaced by every store implementation.
///
/// A secondary-key miss is not an error: it is `Ok(None)` from
/// `find_by_user_id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Unique constraint violated: {0}")]
    UniqueConstraintViolation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid entity: {0}")]
    InvalidEntity(String),
}

