//! Interval algebra and derived-duration engine for timeline activity
//! tracking.
//!
//! Activity intervals live on a minute timeline inside a head (a shift or a
//! production run); cutoff ranges mark non-operational time that must be
//! deducted from every channel in that head. This crate holds the slicing,
//! merging, overlap, layout projection and drag-bounds computations that the
//! editor frontends share, as pure functions over plain minute values.
//! Rendering, gesture capture, persistence and undo live with the callers.

pub mod aggregate;
pub mod algebra;
pub mod clock;
pub mod models;
pub mod projection;
pub mod report;
pub mod shift;
pub mod utils;

pub use aggregate::{channel_durations, joint_actual};
pub use algebra::{
    clamp_intervals, measure, merge_intervals, overlap_report, pairwise_overlap, slice_all,
    slice_interval, OverlapPair, OverlapReport,
};
pub use clock::{format_clock, minutes_from_origin, parse_clock};
pub use models::{Channel, ChannelDurations, DurationTriple, Head, Interval, TimeRange};
pub use projection::{project_intervals, ProjectedSegment, TimelineScale};
pub use report::{summarize_head, ChannelSummary, HeadSummary};
pub use shift::{shift_bounds, ShiftBounds, ShiftSelection};
