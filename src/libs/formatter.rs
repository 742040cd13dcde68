//! Time formatting utilities for log entries.
//!
//! Every string stored in a [`LogEntry`](crate::libs::entry::LogEntry) is
//! produced here, so the log, the terminal tables and the exported
//! spreadsheets all agree on one representation.
//!
//! ## Format Specifications
//!
//! ### Duration
//! Durations use the `HH:MM:SS` pattern:
//! - Hours are zero-padded to at least 2 digits and are never wrapped at 24
//! - Minutes and seconds are zero-padded to exactly 2 digits
//! - Fractional seconds are floored away
//! - Negative durations are treated as `00:00:00`
//!
//! ### Time of day and date
//! - Time of day: 24-hour `HH:MM:SS`
//! - Date: ISO `YYYY-MM-DD`
//!
//! ## Examples
//!
//! ```rust
//! use tasktime::libs::formatter::{format_duration, parse_duration};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::seconds(5)), "00:00:05");
//! assert_eq!(format_duration(&Duration::hours(26)), "26:00:00");
//! assert_eq!(parse_duration("01:30:00"), Some(Duration::minutes(90)));
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a duration as `HH:MM:SS`, flooring to whole seconds.
///
/// `num_seconds` truncates toward zero, which is a floor for the
/// non-negative durations that reach the arithmetic below; negative input is
/// clamped first.
///
/// # Examples
///
/// ```rust
/// use tasktime::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::zero()), "00:00:00");
/// assert_eq!(format_duration(&Duration::milliseconds(5_999)), "00:00:05");
/// assert_eq!(format_duration(&Duration::seconds(3661)), "01:01:01");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00:00");
/// assert_eq!(format_duration(&Duration::hours(100)), "100:00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Parses an `HH:MM:SS` string back into a duration.
///
/// Entries can be edited by hand, so anything that is not three
/// non-negative numeric parts with minutes and seconds below 60 yields `None`.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let mut parts = text.trim().split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let mins: i64 = parts.next()?.parse().ok()?;
    let secs: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&mins) || !(0..60).contains(&secs) {
        return None;
    }

    Some(Duration::seconds(hours * 3600 + mins * 60 + secs))
}

/// Formats the time-of-day part of an instant.
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format(TIME_FORMAT).to_string()
}

/// Formats a calendar date.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
