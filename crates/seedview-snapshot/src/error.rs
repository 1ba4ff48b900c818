//! # Design
//!
//! - Keep "absent" and "empty" as separate variants even though callers treat
//!   both as not-ready; consumers branch on which one occurred.
//! - Keep error messages constant; carry the path and decoder detail as fields.
//! - Preserve sources for diagnostics without re-logging at call sites.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for snapshot reads.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Classified failure of a snapshot read.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The artifact does not exist (producer not started or wrong path).
    #[error("status artifact not found")]
    NotFound {
        /// Path that was checked.
        path: PathBuf,
    },
    /// The artifact exists but holds zero bytes (producer initialising).
    #[error("status artifact is empty")]
    Empty,
    /// The artifact bytes do not decode into a status snapshot.
    #[error("status artifact is malformed")]
    Malformed {
        /// Underlying decoder error.
        source: serde_json::Error,
    },
    /// Any other failure while reading the artifact.
    #[error("status artifact could not be read")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl SnapshotError {
    /// Whether the failure is an expected transient condition that resolves
    /// once the producer has written its first snapshot.
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Empty)
    }

    /// Decoder or IO detail suitable for surfacing to clients.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Malformed { source } => Some(source.to_string()),
            Self::Io { source, .. } => Some(source.to_string()),
            Self::NotFound { .. } | Self::Empty => None,
        }
    }
}
