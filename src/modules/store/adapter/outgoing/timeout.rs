use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::store::application::ports::outgoing::StoreError;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Run a store operation, giving up with `StoreUnavailable` once `limit`
/// has elapsed. Nothing is retried here.
pub async fn bounded<T, F>(limit: Duration, operation: &'static str, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                operation,
                timeout_ms = limit.as_millis() as u64,
                "Store operation timed out"
            );
            Err(StoreError::StoreUnavailable(format!(
                "{operation} timed out after {}ms",
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_operation_passes_result_through() {
        let result = bounded(Duration::from_millis(100), "get", async { Ok::<_, StoreError>(5) }).await;

        assert_eq!(result, Ok(5));
    }

    #[tokio::test]
    async fn store_errors_are_not_rewritten() {
        let result: Result<(), StoreError> =
            bounded(Duration::from_millis(100), "get", async { Err(StoreError::NotFound) }).await;

        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn slow_operation_becomes_store_unavailable() {
        let result: Result<(), StoreError> = bounded(Duration::from_millis(20), "save", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        match result {
            Err(StoreError::StoreUnavailable(msg)) => {
                assert!(msg.contains("save timed out after 20ms"));
            }
            other => panic!("Expected StoreUnavailable, got {:?}", other),
        }
    }
}
