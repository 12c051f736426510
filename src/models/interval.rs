use serde::{Deserialize, Serialize};

/// Half-open minute range `[start, end)` with no payload.
/// Used for cutoff lanes, head extents, and aggregation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length in minutes. An inverted range (end < start) behaves as
    /// zero-length; editors transiently produce those mid-edit.
    pub fn len(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlapping portion of two ranges, `None` when they don't overlap.
    pub fn intersect(&self, other: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(TimeRange::new(start, end))
        } else {
            None
        }
    }

    /// Overlap in minutes, zero when disjoint.
    pub fn overlap_len(&self, other: &TimeRange) -> i64 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0)
    }

    pub fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }

    pub fn translate(&self, delta: i64) -> TimeRange {
        TimeRange::new(self.start + delta, self.end + delta)
    }
}

/// A labeled activity interval: half-open `[start, end)` in minutes plus an
/// opaque payload (id, color, category) carried through every transformation
/// unchanged. Operations never mutate an input interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval<P> {
    pub start: i64,
    pub end: i64,
    pub payload: P,
}

impl<P> Interval<P> {
    pub fn new(start: i64, end: i64, payload: P) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }

    /// Length in minutes, clamped to zero for inverted ranges.
    pub fn len(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}

impl<P: Clone> Interval<P> {
    /// Same payload, new bounds.
    pub fn with_range(&self, range: TimeRange) -> Interval<P> {
        Interval::new(range.start, range.end, self.payload.clone())
    }
}
