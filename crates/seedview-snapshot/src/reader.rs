//! File-backed snapshot reader.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use seedview_api_models::StatusSnapshot;
use tracing::debug;

use crate::error::{SnapshotError, SnapshotResult};

/// Source of status snapshots consumed by the HTTP layer.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Read and decode the current snapshot.
    async fn load(&self) -> SnapshotResult<StatusSnapshot>;

    /// Human-readable location of the source, used in logs.
    fn location(&self) -> String;
}

/// Reads the status artifact from a fixed path on every call.
#[derive(Debug, Clone)]
pub struct FileSnapshotReader {
    path: PathBuf,
}

impl FileSnapshotReader {
    /// Create a reader for the artifact at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the artifact once and decode it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NotFound`] when the file does not exist,
    /// [`SnapshotError::Empty`] when it has zero bytes,
    /// [`SnapshotError::Malformed`] when it does not decode, and
    /// [`SnapshotError::Io`] for any other read failure.
    pub async fn read_snapshot(&self) -> SnapshotResult<StatusSnapshot> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => SnapshotError::NotFound {
                    path: self.path.clone(),
                },
                _ => SnapshotError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "status artifact read");
        decode_snapshot(&bytes)
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotReader {
    async fn load(&self) -> SnapshotResult<StatusSnapshot> {
        self.read_snapshot().await
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode artifact bytes into a snapshot.
///
/// Unknown fields are ignored and absent optional fields decode as `None`; any
/// missing required field or type mismatch fails the whole decode.
///
/// # Errors
///
/// Returns [`SnapshotError::Empty`] for zero-length input and
/// [`SnapshotError::Malformed`] when the bytes are not a valid snapshot.
pub fn decode_snapshot(bytes: &[u8]) -> SnapshotResult<StatusSnapshot> {
    if bytes.is_empty() {
        return Err(SnapshotError::Empty);
    }
    serde_json::from_slice(bytes).map_err(|source| SnapshotError::Malformed { source })
}
