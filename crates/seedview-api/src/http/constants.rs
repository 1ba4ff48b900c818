//! Shared HTTP constants (routes, headers, error codes).

pub(crate) const ROUTE_HEALTH: &str = "/health";
pub(crate) const ROUTE_STATS: &str = "/api/stats";

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// Error code for a missing status artifact.
pub const ERROR_STATUS_FILE_NOT_FOUND: &str = "status_file_not_found";
/// Error code for a zero-length status artifact.
pub const ERROR_STATUS_FILE_EMPTY: &str = "status_file_empty";
/// Error code for an artifact that does not decode.
pub const ERROR_STATUS_FILE_MALFORMED: &str = "status_file_malformed";
/// Error code for any other failure reading the artifact.
pub const ERROR_STATUS_FILE_UNREADABLE: &str = "status_file_unreadable";
/// Error code for unknown routes.
pub const ERROR_NOT_FOUND: &str = "not_found";
/// Error code for a known route called with an unsupported method.
pub const ERROR_METHOD_NOT_ALLOWED: &str = "method_not_allowed";
/// Error code for unexpected failures.
pub const ERROR_INTERNAL: &str = "internal";

pub(crate) const MESSAGE_STATUS_FILE_NOT_FOUND: &str =
    "Superseedr may be starting up or the status file path is incorrect";
pub(crate) const MESSAGE_STATUS_FILE_EMPTY: &str = "Superseedr may be initializing";
