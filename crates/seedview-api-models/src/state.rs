//! Torrent control state labels.

use serde::{Deserialize, Serialize};

/// Lifecycle label reported by the producer for a torrent.
///
/// The label is kept as free text so that states introduced by newer producer
/// versions still decode and are re-emitted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TorrentControlState(String);
