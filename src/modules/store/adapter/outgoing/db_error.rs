use sea_orm::{DbErr, SqlErr};

use crate::store::application::ports::outgoing::StoreError;

/// Translate a sea-orm error into the store taxonomy.
///
/// Unique violations are recognised both from the driver error and from the
/// message text, since not every path (mock connections included) carries a
/// structured SQLSTATE.
pub fn map_db_err(err: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
        return StoreError::UniqueConstraintViolation(msg);
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
        other => {
            let message = other.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("23505")
                || lowered.contains("duplicate key")
                || lowered.contains("unique constraint")
            {
                StoreError::UniqueConstraintViolation(message)
            } else {
                StoreError::StoreUnavailable(message)
            }
        }
    }
}
