//! Two-field duration encoding used by the producer.

use serde::{Deserialize, Serialize};

/// Duration expressed as whole seconds plus sub-second nanoseconds.
///
/// Values are kept exactly as decoded. The producer guarantees
/// `nanos < 1_000_000_000`; this type does not re-check it so that an
/// out-of-range value is forwarded rather than silently carried into `secs`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WireDuration {
    /// Whole seconds.
    pub secs: u64,
    /// Sub-second remainder in nanoseconds.
    pub nanos: u32,
}
