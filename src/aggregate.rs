use crate::algebra::{clamp_intervals, measure, slice_all};
use crate::log_debug;
use crate::models::{Channel, ChannelDurations, DurationTriple, Interval, TimeRange};

const ENABLE_LOGS: bool = false;

/// Raw, net and actual minutes for one channel.
///
/// Raw sums the unsliced interval lengths, net sums the lengths left after
/// every cutoff is removed, and actual is the measure of the merged union of
/// the remaining pieces. With a `bound`, each value only counts time inside
/// it; clamping is applied to the sliced pieces, not the inputs, so a cutoff
/// straddling the bound still deducts exactly its in-bound portion.
///
/// `exceeds_bound` flags a channel whose unclamped raw time is longer than
/// the bound itself. An overflow channel is a valid state, not an error.
pub fn channel_durations<P: Clone>(
    channel: &Channel<P>,
    cutoffs: &[TimeRange],
    bound: Option<&TimeRange>,
) -> ChannelDurations {
    let raw_unclamped: i64 = channel.intervals.iter().map(Interval::len).sum();
    let raw = match bound {
        Some(bound) => channel
            .intervals
            .iter()
            .map(|interval| interval.range().overlap_len(bound))
            .sum(),
        None => raw_unclamped,
    };

    let sliced = clamp_intervals(&slice_all(&channel.intervals, cutoffs), bound);
    let net = sliced.iter().map(Interval::len).sum();
    let actual = measure(&sliced);

    let exceeds_bound = bound.map(|b| raw_unclamped > b.len()).unwrap_or(false);
    log_debug!(
        "channel {}: raw={} net={} actual={} exceeds_bound={}",
        channel.id,
        raw,
        net,
        actual,
        exceeds_bound
    );

    ChannelDurations {
        durations: DurationTriple { raw, net, actual },
        exceeds_bound,
    }
}

/// Minutes covered by the union of every channel's sliced (and optionally
/// bounded) segments. Time two channels spend in parallel counts once, which
/// is why this can fall short of the channels' summed nets.
pub fn joint_actual<P: Clone>(
    channels: &[Channel<P>],
    cutoffs: &[TimeRange],
    bound: Option<&TimeRange>,
) -> i64 {
    let mut pieces = Vec::new();
    for channel in channels {
        pieces.extend(clamp_intervals(
            &slice_all(&channel.intervals, cutoffs),
            bound,
        ));
    }
    measure(&pieces)
}
