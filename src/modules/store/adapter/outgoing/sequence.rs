use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

use super::map_db_err;
use crate::store::application::ports::outgoing::StoreError;

/// After a row of `table` was written with an explicit `id`, move the
/// table's serial sequence to at least that id so a later `nextval` never
/// hands it out again. The sequence never moves backwards.
pub async fn advance_id_sequence(
    db: &DatabaseConnection,
    table: &'static str,
    id: i64,
) -> Result<(), StoreError> {
    let sql = format!(
        "SELECT setval(seq, GREATEST($1, COALESCE(pg_sequence_last_value(seq), 0))) \
         FROM (SELECT pg_get_serial_sequence('{table}', 'id')::regclass AS seq) AS serial"
    );

    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        sql,
        [id.into()],
    ))
    .await
    .map_err(map_db_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn sets_sequence_of_the_given_table() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        advance_id_sequence(&db, "user_preferences", 7).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("setval"));
        assert!(log.contains("pg_get_serial_sequence('user_preferences', 'id')"));
        assert!(log.contains("BigInt(Some(7))"));
    }

    #[tokio::test]
    async fn database_error_is_store_unavailable() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        assert!(matches!(
            advance_id_sequence(&db, "notification_settings", 3).await,
            Err(StoreError::StoreUnavailable(_))
        ));
    }
}
