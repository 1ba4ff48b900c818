//! JSON error responses.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seedview_api_models::ErrorBody;
use seedview_snapshot::SnapshotError;

use crate::http::constants::{
    ERROR_INTERNAL, ERROR_METHOD_NOT_ALLOWED, ERROR_NOT_FOUND, ERROR_STATUS_FILE_EMPTY,
    ERROR_STATUS_FILE_MALFORMED, ERROR_STATUS_FILE_NOT_FOUND, ERROR_STATUS_FILE_UNREADABLE,
    MESSAGE_STATUS_FILE_EMPTY, MESSAGE_STATUS_FILE_NOT_FOUND,
};

/// Error response carrying a status code and an `{error, message}` body.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) code: &'static str,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ERROR_INTERNAL, message)
    }

    pub(crate) fn not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ERROR_NOT_FOUND,
            format!("no route for {path}"),
        )
    }

    pub(crate) fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ERROR_METHOD_NOT_ALLOWED,
            format!("{method} is not supported on {path}"),
        )
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl From<&SnapshotError> for ApiError {
    fn from(error: &SnapshotError) -> Self {
        match error {
            SnapshotError::NotFound { .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ERROR_STATUS_FILE_NOT_FOUND,
                MESSAGE_STATUS_FILE_NOT_FOUND,
            ),
            SnapshotError::Empty => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ERROR_STATUS_FILE_EMPTY,
                MESSAGE_STATUS_FILE_EMPTY,
            ),
            SnapshotError::Malformed { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ERROR_STATUS_FILE_MALFORMED,
                format!(
                    "failed to parse status file: {}",
                    error.detail().unwrap_or_default()
                ),
            ),
            SnapshotError::Io { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ERROR_STATUS_FILE_UNREADABLE,
                format!(
                    "failed to read status file: {}",
                    error.detail().unwrap_or_default()
                ),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.code, self.message);
        (self.status, Json(body)).into_response()
    }
}

/// Converts a handler panic into a generic internal error response.
pub(crate) fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::internal("unexpected internal error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn json_error() -> serde_json::Error {
        match serde_json::from_str::<serde_json::Value>("{\"run_time\":") {
            Ok(_) => unreachable!("truncated json must not parse"),
            Err(err) => err,
        }
    }

    #[test]
    fn not_ready_errors_share_status_but_not_code() {
        let absent = ApiError::from(&SnapshotError::NotFound {
            path: PathBuf::from("status.json"),
        });
        let empty = ApiError::from(&SnapshotError::Empty);

        assert_eq!(absent.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(empty.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_ne!(absent.code, empty.code);
        assert_ne!(absent.message(), empty.message());
    }

    #[test]
    fn corrupt_and_unreadable_map_to_internal_server_error() {
        let malformed = ApiError::from(&SnapshotError::Malformed {
            source: json_error(),
        });
        assert_eq!(malformed.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(malformed.code, ERROR_STATUS_FILE_MALFORMED);
        assert!(malformed.message().starts_with("failed to parse status file: "));
        assert!(malformed.message().contains("EOF while parsing"));

        let unreadable = ApiError::from(&SnapshotError::Io {
            path: PathBuf::from("status.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(unreadable.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unreadable.code, ERROR_STATUS_FILE_UNREADABLE);
        assert!(unreadable.message().ends_with("denied"));
    }

    #[test]
    fn panic_response_is_generic_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
