//! Birth-time normalization and Julian Day conversion.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (universal time)
//! - Parsing of civil birth times (12-hour-with-meridiem or 24-hour)
//! - IANA timezone resolution and DST-aware localization
//! - `BirthInstant`, the canonical birth moment used throughout the engine

pub mod birth_time;
pub mod error;
pub mod julian;

pub use birth_time::{
    BirthInstant, normalize_birth_moment, parse_birth_date, parse_birth_time, resolve_timezone,
};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, current_jd, datetime_to_jd,
    jd_to_calendar};
