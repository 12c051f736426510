use serde::{Deserialize, Serialize};

use crate::algebra::{clamp_intervals, merge_intervals, slice_all};
use crate::models::{Channel, Interval, TimeRange};

/// Total overlapping minutes between two interval sets.
/// Each set is merged internally first, so overlap inside one set cannot
/// double-count against the other.
pub fn pairwise_overlap<P: Clone, Q: Clone>(a: &[Interval<P>], b: &[Interval<Q>]) -> i64 {
    let a = merge_intervals(a);
    let b = merge_intervals(b);
    let mut total = 0;
    for x in &a {
        for y in &b {
            total += (x.end.min(y.end) - x.start.max(y.start)).max(0);
        }
    }
    total
}

/// Overlap minutes between one unordered pair of channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapPair {
    pub first_id: String,
    pub second_id: String,
    pub minutes: i64,
}

/// Pairwise overlap breakdown across a set of channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapReport {
    pub pairs: Vec<OverlapPair>,
    pub total: i64,
}

/// Overlap minutes for every unordered pair of channels, computed on their
/// sliced (and optionally bounded) segments, plus the grand total. Pairs with
/// zero overlap are omitted. When at most two channels cover any given minute,
/// the total explains exactly why the joint actual falls short of the summed
/// nets; with deeper stacking each pair still counts separately.
pub fn overlap_report<P: Clone>(
    channels: &[Channel<P>],
    cutoffs: &[TimeRange],
    bound: Option<&TimeRange>,
) -> OverlapReport {
    let sliced: Vec<Vec<Interval<P>>> = channels
        .iter()
        .map(|channel| clamp_intervals(&slice_all(&channel.intervals, cutoffs), bound))
        .collect();

    let mut pairs = Vec::new();
    let mut total = 0;
    for i in 0..channels.len() {
        for j in (i + 1)..channels.len() {
            let minutes = pairwise_overlap(&sliced[i], &sliced[j]);
            if minutes > 0 {
                pairs.push(OverlapPair {
                    first_id: channels[i].id.clone(),
                    second_id: channels[j].id.clone(),
                    minutes,
                });
                total += minutes;
            }
        }
    }
    OverlapReport { pairs, total }
}
