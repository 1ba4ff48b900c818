//! Root status document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::torrent::TorrentInfo;

/// Complete status snapshot written by the producer on every tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusSnapshot {
    /// Producer uptime in seconds.
    pub run_time: u64,
    /// Process CPU usage in percent.
    pub cpu_usage: f64,
    /// Process memory usage in percent of system memory.
    pub ram_usage_percent: f64,
    /// Aggregate download rate across torrents.
    pub total_download_bps: u64,
    /// Aggregate upload rate across torrents.
    pub total_upload_bps: u64,
    /// Torrents keyed by their identifier.
    pub torrents: BTreeMap<String, TorrentInfo>,
    /// Settings mirror.
    pub settings: Settings,
}
