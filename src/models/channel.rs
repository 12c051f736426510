use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Interval, TimeRange};

/// A named activity stream with its own list of intervals, nested under a head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel<P> {
    pub id: String,
    pub name: String,
    pub intervals: Vec<Interval<P>>,
}

impl<P> Channel<P> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            intervals: Vec::new(),
        }
    }

    pub fn with_intervals(name: impl Into<String>, intervals: Vec<Interval<P>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            intervals,
        }
    }

    /// Covering range of this channel's intervals, `None` when it has none.
    pub fn extent(&self) -> Option<TimeRange> {
        let mut spans = self.intervals.iter().map(Interval::range);
        let first = spans.next()?;
        Some(spans.fold(first, |acc, r| {
            TimeRange::new(acc.start.min(r.start), acc.end.max(r.end))
        }))
    }
}

/// The outer time range (a shift or production run) that bounds its channels.
/// Cutoff ranges subtract from every channel in the same head, never across
/// heads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Head<P> {
    pub id: String,
    pub name: String,
    pub extent: TimeRange,
    pub channels: Vec<Channel<P>>,
    pub cutoffs: Vec<TimeRange>,
}

impl<P> Head<P> {
    pub fn new(name: impl Into<String>, extent: TimeRange) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            extent,
            channels: Vec::new(),
            cutoffs: Vec::new(),
        }
    }
}
