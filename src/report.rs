use serde::{Deserialize, Serialize};

use crate::aggregate::{channel_durations, joint_actual};
use crate::algebra::{overlap_report, OverlapReport};
use crate::log_debug;
use crate::models::{ChannelDurations, Head};

const ENABLE_LOGS: bool = true;

/// One channel's totals, ready for a legend row or report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    pub name: String,
    pub totals: ChannelDurations,
}

/// Report-ready totals for one head: per-channel durations clamped to the
/// head extent, the joint actual across all channels, and the pairwise
/// overlap breakdown explaining why the joint actual falls short of the
/// summed nets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadSummary {
    pub head_id: String,
    pub channels: Vec<ChannelSummary>,
    pub joint_actual: i64,
    pub overlap: OverlapReport,
}

/// Assemble the full duration picture for a head. Pure function of its
/// input: identical heads give identical summaries, so consumers can
/// memoize per render.
pub fn summarize_head<P: Clone>(head: &Head<P>) -> HeadSummary {
    let bound = Some(&head.extent);

    let channels = head
        .channels
        .iter()
        .map(|channel| ChannelSummary {
            channel_id: channel.id.clone(),
            name: channel.name.clone(),
            totals: channel_durations(channel, &head.cutoffs, bound),
        })
        .collect();

    let joint = joint_actual(&head.channels, &head.cutoffs, bound);
    let overlap = overlap_report(&head.channels, &head.cutoffs, bound);

    log_debug!(
        "head {}: {} channels, joint_actual={} overlap_total={}",
        head.id,
        head.channels.len(),
        joint,
        overlap.total
    );

    HeadSummary {
        head_id: head.id.clone(),
        channels,
        joint_actual: joint,
        overlap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Channel, Interval, TimeRange};

    fn two_machine_head() -> Head<&'static str> {
        let mut head = Head::new("morning shift", TimeRange::new(0, 480));
        head.channels = vec![
            Channel::with_intervals("mill", vec![Interval::new(0, 50, "m")]),
            Channel::with_intervals("lathe", vec![Interval::new(25, 75, "l")]),
        ];
        head
    }

    #[test]
    fn summary_reconciles_nets_overlap_and_joint_actual() {
        let summary = summarize_head(&two_machine_head());
        let net_sum: i64 = summary
            .channels
            .iter()
            .map(|c| c.totals.durations.net)
            .sum();
        assert_eq!(net_sum, 100);
        assert_eq!(summary.overlap.total, 25);
        assert_eq!(summary.joint_actual, 75);
        assert_eq!(net_sum - summary.overlap.total, summary.joint_actual);
    }

    #[test]
    fn summary_applies_head_cutoffs_to_every_channel() {
        let mut head = two_machine_head();
        head.cutoffs = vec![TimeRange::new(30, 40)];
        let summary = summarize_head(&head);
        assert_eq!(summary.channels[0].totals.durations.net, 40);
        assert_eq!(summary.channels[1].totals.durations.net, 40);
        // the cutoff removes shared minutes too
        assert_eq!(summary.overlap.total, 15);
        assert_eq!(summary.joint_actual, 65);
    }

    #[test]
    fn summary_is_deterministic() {
        let head = two_machine_head();
        assert_eq!(summarize_head(&head), summarize_head(&head));
    }
}
