//! Mirror of the producer's global settings.

use serde::{Deserialize, Serialize};

use crate::state::TorrentControlState;
use crate::torrent::FilePriorities;

/// Global client configuration as reported alongside each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Peer identifier advertised by the client.
    pub client_id: String,
    /// Listening port for peer connections.
    pub client_port: u16,
    /// Torrents configured in the client.
    pub torrents: Vec<SettingsTorrent>,
    /// Bytes downloaded over the client's lifetime.
    pub lifetime_downloaded: u64,
    /// Bytes uploaded over the client's lifetime.
    pub lifetime_uploaded: u64,
    /// Whether DHT/PEX are disabled for private trackers.
    pub private_client: bool,
    /// Sort column of the torrent table.
    pub torrent_sort_column: String,
    /// Sort direction of the torrent table.
    pub torrent_sort_direction: String,
    /// Sort column of the peer table.
    pub peer_sort_column: String,
    /// Sort direction of the peer table.
    pub peer_sort_direction: String,
    /// Folder watched for new `.torrent` files, when configured.
    #[serde(default)]
    pub watch_folder: Option<String>,
    /// Default target directory for new torrents.
    pub default_download_folder: String,
    /// Upper bound on connected peers.
    pub max_connected_peers: u64,
    /// DHT bootstrap nodes.
    pub bootstrap_nodes: Vec<String>,
    /// Global download rate limit (0 means unlimited).
    pub global_download_limit_bps: u64,
    /// Global upload rate limit (0 means unlimited).
    pub global_upload_limit_bps: u64,
    /// Concurrent piece validations allowed.
    pub max_concurrent_validations: u64,
    /// Concurrent outbound connection attempts allowed.
    pub connection_attempt_permits: u64,
    /// Override for the detected file-descriptor budget, when set.
    #[serde(default)]
    pub resource_limit_override: Option<u64>,
    /// Unchoked upload slots.
    pub upload_slots: u64,
    /// Outstanding block uploads allowed per peer.
    pub peer_upload_in_flight_limit: u64,
    /// Announce interval used when a tracker does not provide one.
    pub tracker_fallback_interval_secs: u64,
    /// Announce interval used while leeching when a tracker does not provide one.
    pub client_leeching_fallback_interval_secs: u64,
    /// Interval at which the producer rewrites the status artifact.
    pub output_status_interval: u64,
}

/// Torrent entry inside [`Settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsTorrent {
    /// Source `.torrent` path or magnet link.
    pub torrent_or_magnet: String,
    /// Display name.
    pub name: String,
    /// Whether on-disk data has been validated.
    pub validation_status: bool,
    /// Target directory on disk.
    pub download_path: String,
    /// Container (root folder) name inside the download path.
    pub container_name: String,
    /// Configured lifecycle label.
    pub torrent_control_state: TorrentControlState,
    /// Per-file priorities.
    pub file_priorities: FilePriorities,
}
