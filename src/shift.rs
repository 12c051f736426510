use serde::{Deserialize, Serialize};

use crate::models::{Channel, TimeRange};

/// One selected channel's interval extent and the head range containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSelection {
    pub extent: TimeRange,
    pub container: TimeRange,
}

impl ShiftSelection {
    /// Selection entry for a channel inside `container`; `None` when the
    /// channel has no intervals and so nothing to move.
    pub fn for_channel<P>(channel: &Channel<P>, container: TimeRange) -> Option<ShiftSelection> {
        channel.extent().map(|extent| ShiftSelection {
            extent,
            container,
        })
    }
}

/// Signed delta range that keeps a dragged selection inside its containers.
/// When the current position is itself legal, `min <= 0 <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftBounds {
    pub min: i64,
    pub max: i64,
}

impl ShiftBounds {
    pub fn contains(&self, delta: i64) -> bool {
        self.min <= delta && delta <= self.max
    }
}

/// Legal translation deltas for dragging every channel in `selection`
/// together: the intersection of each channel's individual range
/// `[container.start - extent.start, container.end - extent.end]`.
///
/// `None` means no legal move: the containers don't leave enough room, or
/// nothing is selected. Callers must leave the selection untouched rather
/// than apply a clamped or partial delta; moving channels by different
/// amounts would break the drag-together intent.
pub fn shift_bounds(selection: &[ShiftSelection]) -> Option<ShiftBounds> {
    let mut joint: Option<ShiftBounds> = None;
    for item in selection {
        let min = item.container.start - item.extent.start;
        let max = item.container.end - item.extent.end;
        joint = Some(match joint {
            None => ShiftBounds { min, max },
            Some(bounds) => ShiftBounds {
                min: bounds.min.max(min),
                max: bounds.max.min(max),
            },
        });
    }
    joint.filter(|bounds| bounds.min <= bounds.max)
}
