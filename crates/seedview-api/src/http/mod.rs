//! HTTP surface modules (router, handlers, error mapping).

/// Shared constants: error codes, messages and header names.
pub mod constants;
/// Error responses and snapshot failure mapping.
pub mod errors;
/// Liveness endpoint.
pub mod health;
/// Router construction and server host.
pub mod router;
/// Status snapshot endpoint.
pub mod stats;
