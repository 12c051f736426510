use serde::{Deserialize, Serialize};

use crate::algebra::slice_interval;
use crate::log_warn;
use crate::models::{Interval, TimeRange};

const ENABLE_LOGS: bool = true;

/// Scale parameters mapping absolute minutes to percent-of-timeline.
/// `offset` is the minute rendered at 0% and `total_duration` the minutes
/// spanned by the full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineScale {
    pub offset: i64,
    pub total_duration: i64,
}

/// A renderable piece of an interval after slicing and scale projection.
/// `left` may be negative when the piece starts before the visible origin;
/// flooring it to a visible minimum is the renderer's concern. `width` is
/// never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedSegment<P> {
    pub left: f64,
    pub width: f64,
    pub start: i64,
    pub end: i64,
    pub payload: P,
}

/// Slice `intervals` by `cutoffs`, then map every remaining piece onto the
/// percentage scale. Zero-length intervals come back as zero-width segments
/// rather than being dropped, so the renderer decides whether to hide them.
pub fn project_intervals<P: Clone>(
    intervals: &[Interval<P>],
    cutoffs: &[TimeRange],
    scale: &TimelineScale,
) -> Vec<ProjectedSegment<P>> {
    debug_assert!(
        scale.total_duration > 0,
        "timeline scale must span a positive duration"
    );
    if scale.total_duration <= 0 {
        log_warn!(
            "timeline scale spans {} minutes; emitting zero-width segments",
            scale.total_duration
        );
    }

    let mut segments = Vec::new();
    for interval in intervals {
        if interval.is_empty() {
            // a point marker has no time to cut
            segments.push(project_one(
                interval.start,
                interval.start,
                interval.payload.clone(),
                scale,
            ));
            continue;
        }
        for piece in slice_interval(interval, cutoffs) {
            segments.push(project_one(piece.start, piece.end, piece.payload, scale));
        }
    }
    segments
}

fn project_one<P>(start: i64, end: i64, payload: P, scale: &TimelineScale) -> ProjectedSegment<P> {
    if scale.total_duration <= 0 {
        // degrade to zero-width instead of dividing by zero
        return ProjectedSegment {
            left: 0.0,
            width: 0.0,
            start,
            end,
            payload,
        };
    }
    let total = scale.total_duration as f64;
    ProjectedSegment {
        left: (start - scale.offset) as f64 / total * 100.0,
        width: (end - start) as f64 / total * 100.0,
        start,
        end,
        payload,
    }
}
