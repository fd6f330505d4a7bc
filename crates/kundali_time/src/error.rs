//! Error types for birth-time normalization.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors from parsing and localizing a birth moment.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Time string matched neither `HH:MM AM/PM` nor 24-hour `HH:MM`.
    #[error("invalid time format {0:?}: expected \"HH:MM AM/PM\" or 24-hour \"HH:MM\"")]
    InvalidTimeFormat(String),
    /// Date string did not match `YYYY-MM-DD`.
    #[error("invalid date format {0:?}: expected \"YYYY-MM-DD\"")]
    InvalidDateFormat(String),
    /// Timezone name not present in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// Local time falls inside a DST spring-forward gap.
    #[error("local time {datetime} does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        datetime: NaiveDateTime,
        timezone: String,
    },
}
