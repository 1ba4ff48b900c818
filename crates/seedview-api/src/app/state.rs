//! API application state.

use std::sync::Arc;

use seedview_snapshot::SnapshotSource;

/// Immutable dependencies handed to every request.
///
/// Holds no per-request data; each request performs its own read through
/// `snapshots`.
pub(crate) struct ApiState {
    pub(crate) snapshots: Arc<dyn SnapshotSource>,
}

impl ApiState {
    pub(crate) fn new(snapshots: Arc<dyn SnapshotSource>) -> Self {
        Self { snapshots }
    }
}
