//! # Design
//!
//! - Report which variable failed and why through structured fields.
//! - Keep the display message constant so logs group by failure kind.

use thiserror::Error;

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while resolving configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment value could not be parsed or was out of range.
    #[error("invalid configuration field")]
    InvalidField {
        /// Environment variable name.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value.
        value: Option<String>,
    },
}
