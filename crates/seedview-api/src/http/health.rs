//! Liveness endpoint.

use axum::Json;
use seedview_api_models::HealthResponse;

/// Reports that the HTTP process is up. Never consults the snapshot reader.
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
