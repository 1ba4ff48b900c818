//! Status snapshot endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use seedview_api_models::StatusSnapshot;
use seedview_snapshot::SnapshotError;
use tracing::{debug, error};

use crate::app::state::ApiState;
use crate::http::errors::ApiError;

/// Reads the artifact once and returns it verbatim, or the classified failure.
pub(crate) async fn stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<StatusSnapshot>, ApiError> {
    match state.snapshots.load().await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(err) => Err(map_snapshot_error(&err, &state.snapshots.location())),
    }
}

fn map_snapshot_error(err: &SnapshotError, location: &str) -> ApiError {
    let api_error = ApiError::from(err);
    if err.is_not_ready() {
        debug!(
            location = %location,
            code = api_error.code,
            "status artifact not ready"
        );
    } else {
        error!(
            location = %location,
            code = api_error.code,
            error = %err,
            detail = api_error.message(),
            "status artifact could not be served"
        );
    }
    api_error
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use seedview_snapshot::{SnapshotResult, SnapshotSource, decode_snapshot};
    use seedview_test_support::fixtures::sample_snapshot_json;
    use std::path::PathBuf;

    struct StubSource {
        bytes: Option<Vec<u8>>,
    }

    #[async_trait]
    impl SnapshotSource for StubSource {
        async fn load(&self) -> SnapshotResult<StatusSnapshot> {
            match &self.bytes {
                Some(bytes) => decode_snapshot(bytes),
                None => Err(SnapshotError::NotFound {
                    path: PathBuf::from("stub.json"),
                }),
            }
        }

        fn location(&self) -> String {
            "stub".to_string()
        }
    }

    fn state(bytes: Option<&[u8]>) -> State<Arc<ApiState>> {
        State(Arc::new(ApiState::new(Arc::new(StubSource {
            bytes: bytes.map(<[u8]>::to_vec),
        }))))
    }

    #[tokio::test]
    async fn stats_returns_decoded_snapshot() {
        let Json(snapshot) = stats(state(Some(sample_snapshot_json().as_bytes())))
            .await
            .expect("snapshot is served");
        assert_eq!(snapshot.torrents.len(), 2);
    }

    #[tokio::test]
    async fn stats_maps_each_failure_class() {
        let absent = stats(state(None)).await.expect_err("absent artifact");
        assert_eq!(absent.status, StatusCode::SERVICE_UNAVAILABLE);

        let empty = stats(state(Some(b""))).await.expect_err("empty artifact");
        assert_eq!(empty.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_ne!(absent.code, empty.code);

        let corrupt = stats(state(Some(b"[1, 2, 3]")))
            .await
            .expect_err("corrupt artifact");
        assert_eq!(corrupt.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
