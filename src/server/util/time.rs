//! Clock-time parsing and comparison.
//!
//! Opening hours and infinity pass windows arrive as `HH:MM` strings. They are parsed into
//! [`NaiveTime`] once, then compared at minute resolution so that `"9:00"` and `"09:00"`
//! are the same time and seconds never decide an ordering.

use chrono::{NaiveTime, Timelike};

use crate::server::error::validation::ValidationError;

/// Parse a 24 hour clock time.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`. Seconds are dropped.
///
/// # Returns
/// - `Ok(NaiveTime)` - Time truncated to the minute
/// - `Err(ValidationError)` - Value is not a valid clock time, scoped to `field`
pub fn parse_clock_time(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || {
        ValidationError::new(
            field,
            format!("{field} must be a 24 hour time in HH:MM format"),
        )
    };

    let mut parts = value.trim().split(':');
    let (hour, minute) = match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => (hour, minute),
        _ => return Err(invalid()),
    };

    if let Some(second) = parts.next() {
        if second.len() != 2 || second.parse::<u32>().map_or(true, |s| s > 59) {
            return Err(invalid());
        }
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour = hour.parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.parse::<u32>().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Render a time as zero padded `HH:MM`
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes since midnight
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Whether `start` falls strictly before `end`, compared to the minute
pub fn is_before(start: NaiveTime, end: NaiveTime) -> bool {
    minute_of_day(start) < minute_of_day(end)
}
