//! Canonical status documents.

use serde_json::Value;

const SAMPLE_SNAPSHOT: &str = include_str!("../fixtures/superseedr_output_example.json");

/// Default artifact file name used by the service when `STATUS_FILE` is unset.
pub const DEFAULT_ARTIFACT_NAME: &str = "superseedr_output_example.json";

/// A complete, valid status document with two torrents.
#[must_use]
pub const fn sample_snapshot_json() -> &'static str {
    SAMPLE_SNAPSHOT
}

/// The sample document parsed into a JSON value.
///
/// # Panics
///
/// Panics if the bundled fixture is not valid JSON.
#[must_use]
pub fn sample_snapshot_value() -> Value {
    serde_json::from_str(SAMPLE_SNAPSHOT).expect("bundled snapshot fixture is valid json")
}

/// The sample document with `number_of_pieces_completed` of the first torrent
/// turned into a string, which is valid JSON but not a valid snapshot.
///
/// # Panics
///
/// Panics if the bundled fixture does not have the expected shape.
#[must_use]
pub fn mistyped_snapshot_json() -> String {
    let mut value = sample_snapshot_value();
    let torrent = value["torrents"]
        .as_object_mut()
        .and_then(|torrents| torrents.values_mut().next())
        .expect("fixture has at least one torrent");
    torrent["number_of_pieces_completed"] = Value::String("11800".to_string());
    value.to_string()
}

/// The sample document with full-precision floats in the gauges and inside an
/// opaque file priority, plus an integer-valued `ram_usage_percent`.
///
/// The literals are the shortest representations of their `f64` values, as a
/// serde-based producer writes them.
#[must_use]
pub fn precise_floats_snapshot_json() -> String {
    SAMPLE_SNAPSHOT
        .replacen("\"cpu_usage\": 3.75", "\"cpu_usage\": 90.48900076081691", 1)
        .replacen("\"ram_usage_percent\": 1.25", "\"ram_usage_percent\": 0", 1)
        .replacen(
            "\"file_priorities\": {}",
            "\"file_priorities\": { \"weight\": 24.193807039436198 }",
            1,
        )
}
