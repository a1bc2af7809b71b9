//! General time utility functions

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::convert::TryFrom;

/// Number of nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Number of microseconds in a second
pub const MICROS_PER_SECOND: u64 = 1_000_000;

/// Convert a duration into a number of seconds, or `None` if overflow
pub fn duration_to_seconds(duration: Duration) -> Option<f64> {
    duration
        .num_nanoseconds()
        .map(|ns| ns as f64 / NANOS_PER_SECOND as f64)
}

/// Convert a time in microseconds since the unix epoch into a UTC date time.
///
/// Returns `None` if the time is zero (unknown) or cannot be represented.
pub fn epoch_us_to_datetime(epoch_us: u64) -> Option<DateTime<Utc>> {
    if epoch_us == 0 {
        return None;
    }

    let secs = i64::try_from(epoch_us / MICROS_PER_SECOND).ok()?;
    let nanos = ((epoch_us % MICROS_PER_SECOND) * 1000) as u32;

    Utc.timestamp_opt(secs, nanos).single()
}
