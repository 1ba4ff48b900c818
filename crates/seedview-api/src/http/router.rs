//! Router construction and server host for the API.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::MatchedPath,
    http::{
        Method, Request, Uri,
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use seedview_snapshot::SnapshotSource;
use seedview_telemetry::{build_sha, set_request_context};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::app::state::ApiState;
use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{HEADER_REQUEST_ID, ROUTE_HEALTH, ROUTE_STATS};
use crate::http::errors::{ApiError, panic_response};
use crate::http::health::health;
use crate::http::stats::stats;

/// Axum router wrapper that hosts the status API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the server around a snapshot source.
    #[must_use]
    pub fn new(snapshots: Arc<dyn SnapshotSource>) -> Self {
        let state = Arc::new(ApiState::new(snapshots));

        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("");

                let span = tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = tracing::field::Empty,
                    request_id = tracing::field::Empty,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                );
                set_request_context(&span, request_id, route_label(request));
                span
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(|response: &Response, latency: Duration, span: &Span| {
                span.record("status_code", response.status().as_u16());
                let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                span.record("latency_ms", latency_ms);
            });
        // Request ids must be assigned before the propagate layer sees the request.
        let layered = ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(seedview_telemetry::set_request_id_layer())
            .layer(seedview_telemetry::propagate_request_id_layer())
            .layer(trace_layer);

        let router = Self::public_routes()
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .layer(layered)
            .layer(cors_layer)
            .with_state(state);

        Self { router }
    }

    fn public_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route(ROUTE_HEALTH, get(health))
            .route(ROUTE_STATS, get(stats))
    }

    /// Consume the server and return the configured router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve on `addr` until `shutdown` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve_with_shutdown<F>(self, addr: SocketAddr, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr().unwrap_or(addr);
        info!(addr = %local_addr, "Starting API");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }
}

/// Route template for matched requests, raw path for everything else.
fn route_label<B>(request: &Request<B>) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}

async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    ApiError::method_not_allowed(method.as_str(), uri.path()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, StatusCode, header::ACCESS_CONTROL_ALLOW_ORIGIN};
    use seedview_api_models::StatusSnapshot;
    use seedview_snapshot::{SnapshotError, SnapshotResult};
    use serde_json::{Value, json};
    use std::error::Error;
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct MissingSource;

    #[async_trait]
    impl SnapshotSource for MissingSource {
        async fn load(&self) -> SnapshotResult<StatusSnapshot> {
            Err(SnapshotError::NotFound {
                path: PathBuf::from("missing.json"),
            })
        }

        fn location(&self) -> String {
            "missing.json".to_string()
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl SnapshotSource for PanickingSource {
        async fn load(&self) -> SnapshotResult<StatusSnapshot> {
            panic!("source exploded")
        }

        fn location(&self) -> String {
            "panic".to_string()
        }
    }

    fn router(source: Arc<dyn SnapshotSource>) -> Router {
        ApiServer::new(source).into_router()
    }

    async fn send(
        router: Router,
        request: Request<Body>,
    ) -> Result<(StatusCode, Value), Box<dyn Error>> {
        let response = router.oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    fn get_request(uri: &str) -> Result<Request<Body>, axum::http::Error> {
        Request::builder().uri(uri).body(Body::empty())
    }

    #[tokio::test]
    async fn health_ignores_snapshot_state() -> Result<(), Box<dyn Error>> {
        let (status, body) = send(router(Arc::new(MissingSource)), get_request("/health")?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        Ok(())
    }

    #[tokio::test]
    async fn missing_artifact_is_service_unavailable() -> Result<(), Box<dyn Error>> {
        let (status, body) =
            send(router(Arc::new(MissingSource)), get_request("/api/stats")?).await?;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "status_file_not_found");
        assert!(body["message"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_uses_error_body() -> Result<(), Box<dyn Error>> {
        let (status, body) =
            send(router(Arc::new(MissingSource)), get_request("/api/unknown")?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        Ok(())
    }

    #[tokio::test]
    async fn write_methods_are_rejected() -> Result<(), Box<dyn Error>> {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/stats")
            .body(Body::empty())?;
        let (status, body) = send(router(Arc::new(MissingSource)), request).await?;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "method_not_allowed");
        Ok(())
    }

    #[tokio::test]
    async fn handler_panic_becomes_internal_error() -> Result<(), Box<dyn Error>> {
        let (status, body) =
            send(router(Arc::new(PanickingSource)), get_request("/api/stats")?).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal");
        Ok(())
    }

    #[tokio::test]
    async fn cors_allows_any_origin_for_reads() -> Result<(), Box<dyn Error>> {
        let request = Request::builder()
            .uri("/health")
            .header(ORIGIN, "http://dashboard.local")
            .body(Body::empty())?;
        let response = router(Arc::new(MissingSource)).oneshot(request).await?;
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn preflight_lists_read_only_methods() -> Result<(), Box<dyn Error>> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/stats")
            .header(ORIGIN, "http://dashboard.local")
            .header("access-control-request-method", "GET")
            .body(Body::empty())?;
        let response = router(Arc::new(MissingSource)).oneshot(request).await?;
        assert!(response.status().is_success());
        let methods = response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(methods.contains("GET"));
        assert!(!methods.contains("POST"));
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_propagated() -> Result<(), Box<dyn Error>> {
        let request = Request::builder()
            .uri("/health")
            .header(HEADER_REQUEST_ID, "req-123")
            .body(Body::empty())?;
        let response = router(Arc::new(MissingSource)).oneshot(request).await?;
        assert_eq!(
            response.headers().get(HEADER_REQUEST_ID),
            Some(&HeaderValue::from_static("req-123"))
        );

        let response = router(Arc::new(MissingSource))
            .oneshot(get_request("/health")?)
            .await?;
        assert!(response.headers().contains_key(HEADER_REQUEST_ID));
        Ok(())
    }

    #[tokio::test]
    async fn route_label_prefers_the_matched_template() -> Result<(), Box<dyn Error>> {
        let router: Router = Router::new().route(
            "/items/{id}",
            get(|request: Request<Body>| async move { route_label(&request).to_string() }),
        );
        let response = router.oneshot(get_request("/items/7")?).await?;
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&bytes[..], b"/items/{id}");

        let unmatched = Request::builder().uri("/items/7/extra").body(())?;
        assert_eq!(route_label(&unmatched), "/items/7/extra");
        Ok(())
    }
}
