#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire models for the superseedr status snapshot.
//!
//! The snapshot is produced by the seeding client and re-served verbatim by the
//! API. Field names and the two-field duration encoding are part of the
//! compatibility surface consumed by the dashboard, so every type here
//! round-trips without renaming or normalising values.
//!
//! Layout: `snapshot.rs` (root document), `torrent.rs` (per-torrent runtime
//! state), `settings.rs` (client settings mirror), `duration.rs` (secs/nanos
//! pair), `state.rs` (control state labels).

pub mod duration;
pub mod settings;
pub mod snapshot;
pub mod state;
pub mod torrent;

use serde::{Deserialize, Serialize};

pub use duration::WireDuration;
pub use settings::{Settings, SettingsTorrent};
pub use snapshot::StatusSnapshot;
pub use state::TorrentControlState;
pub use torrent::{FilePriorities, TorrentInfo};

/// Error document returned for every non-success API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Short machine-readable error code (e.g. `status_file_not_found`).
    pub error: String,
    /// Human-readable detail suitable for display.
    pub message: String,
}

impl ErrorBody {
    /// Build an error body from a code and a message.
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Liveness payload served by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `ok` while the HTTP process is up.
    pub status: String,
}

impl HealthResponse {
    /// The fixed liveness payload.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
