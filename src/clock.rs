use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

/// Parse an "HH:MM" clock string into minutes.
/// Hours may exceed 23, since production logs routinely run past midnight;
/// the minutes component must be 0..=59.
pub fn parse_clock(text: &str) -> Result<i64> {
    let (hours, minutes) = text
        .split_once(':')
        .with_context(|| format!("invalid clock string {text:?}, expected HH:MM"))?;
    let hours: i64 = hours
        .parse()
        .with_context(|| format!("invalid hours in clock string {text:?}"))?;
    let minutes: i64 = minutes
        .parse()
        .with_context(|| format!("invalid minutes in clock string {text:?}"))?;
    if hours < 0 || !(0..60).contains(&minutes) {
        bail!("clock value out of range: {text:?}");
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes as a zero-padded "HH:MM" string.
/// Negative values clamp to "00:00".
pub fn format_clock(total_minutes: i64) -> String {
    let clamped = total_minutes.max(0);
    format!("{:02}:{:02}", clamped / 60, clamped % 60)
}

/// Whole minutes elapsed from `origin` to `instant`, truncating seconds.
/// Negative when `instant` precedes the origin.
pub fn minutes_from_origin(origin: DateTime<Utc>, instant: DateTime<Utc>) -> i64 {
    (instant - origin).num_minutes()
}
