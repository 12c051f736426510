pub mod channel;
pub mod duration;
pub mod interval;

pub use channel::{Channel, Head};
pub use duration::{ChannelDurations, DurationTriple};
pub use interval::{Interval, TimeRange};
