//! Per-torrent runtime state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::duration::WireDuration;
use crate::state::TorrentControlState;

/// File priority mapping keyed by file name or index.
///
/// Values are forwarded opaquely; the producer decides their shape.
pub type FilePriorities = Map<String, Value>;

/// Runtime metrics for a single torrent, as of the producer's last tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TorrentInfo {
    /// Lifecycle label (running, paused, ...).
    pub torrent_control_state: TorrentControlState,
    /// Raw info-hash bytes.
    pub info_hash: Vec<u8>,
    /// Source `.torrent` path or magnet link.
    pub torrent_or_magnet: String,
    /// Display name.
    pub torrent_name: String,
    /// Target directory on disk.
    pub download_path: String,
    /// Container (root folder) name inside the download path.
    pub container_name: String,
    /// Per-file priorities.
    pub file_priorities: FilePriorities,
    /// Peers with an established connection.
    pub number_of_successfully_connected_peers: u32,
    /// Total pieces in the torrent.
    pub number_of_pieces_total: u32,
    /// Pieces verified on disk.
    pub number_of_pieces_completed: u32,
    /// Instantaneous download rate.
    pub download_speed_bps: u64,
    /// Instantaneous upload rate.
    pub upload_speed_bps: u64,
    /// Bytes received during the last tick.
    pub bytes_downloaded_this_tick: u64,
    /// Bytes sent during the last tick.
    pub bytes_uploaded_this_tick: u64,
    /// Estimated time to completion.
    pub eta: WireDuration,
    /// Free-text activity description.
    pub activity_message: String,
    /// Time until the next tracker announce.
    pub next_announce_in: WireDuration,
    /// Total payload size in bytes.
    pub total_size: u64,
    /// Payload bytes written to disk.
    pub bytes_written: u64,
    /// Blocks received during the last tick.
    pub blocks_in_this_tick: u64,
    /// Blocks sent during the last tick.
    pub blocks_out_this_tick: u64,
}
