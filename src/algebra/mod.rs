pub mod merge;
pub mod overlap;
pub mod slice;

pub use merge::{measure, merge_intervals};
pub use overlap::{overlap_report, pairwise_overlap, OverlapPair, OverlapReport};
pub use slice::{clamp_intervals, slice_all, slice_interval};
