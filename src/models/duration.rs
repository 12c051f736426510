use serde::{Deserialize, Serialize};

/// Raw (unsliced sum), net (cutoff-sliced sum) and actual (merged union of
/// slices) minutes for a channel or group of channels.
/// For a single channel with non-negative cutoffs, `actual <= net <= raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationTriple {
    pub raw: i64,
    pub net: i64,
    pub actual: i64,
}

impl DurationTriple {
    pub const ZERO: DurationTriple = DurationTriple {
        raw: 0,
        net: 0,
        actual: 0,
    };
}

/// Aggregation result for one channel. A channel whose raw time exceeds its
/// head's nominal extent is a valid state, reported via `exceeds_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDurations {
    pub durations: DurationTriple,
    pub exceeds_bound: bool,
}
