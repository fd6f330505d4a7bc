//! Civil birth date/time parsing and timezone-aware normalization.
//!
//! A birth moment arrives as a calendar date, a clock time in either
//! 12-hour-with-meridiem or 24-hour form, and an IANA timezone name.
//! Normalization resolves DST once, at construction, and yields both a
//! timezone-aware timestamp and the Julian Day the ephemeris consumes.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::datetime_to_jd;

/// A fully resolved birth moment.
///
/// The local and UTC representations denote the same instant; `julian_day`
/// is that instant as a real-valued day count in universal time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInstant {
    /// Timezone-aware local civil timestamp.
    pub local: DateTime<Tz>,
    /// The same instant in UTC.
    pub utc: DateTime<Utc>,
    /// Julian Day in universal time, fractional part = time-of-day.
    pub julian_day: f64,
}

impl BirthInstant {
    /// Localize a civil date/time in the given zone and derive the Julian Day.
    ///
    /// Fall-back ambiguity (clocks set back) resolves to the later UTC
    /// instant, i.e. the standard-time offset. A spring-forward gap is an
    /// error rather than a silent shift.
    pub fn from_civil(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<Self, TimeError> {
        let naive = date.and_time(time);
        let local = match naive.and_local_timezone(tz) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(_, standard) => standard,
            LocalResult::None => {
                return Err(TimeError::NonexistentLocalTime {
                    datetime: naive,
                    timezone: tz.name().to_string(),
                });
            }
        };
        let utc = local.with_timezone(&Utc);
        let julian_day = datetime_to_jd(&utc);
        Ok(Self {
            local,
            utc,
            julian_day,
        })
    }

    /// The local clock time in 24-hour `HH:MM` form.
    pub fn time_24hr(&self) -> String {
        format!("{:02}:{:02}", self.local.hour(), self.local.minute())
    }
}

/// Parse a birth date in `YYYY-MM-DD` form.
pub fn parse_birth_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDateFormat(s.to_string()))
}

/// Parse a birth time, attempting `HH:MM AM/PM` first, then 24-hour `HH:MM`.
pub fn parse_birth_time(s: &str) -> Result<NaiveTime, TimeError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| TimeError::InvalidTimeFormat(s.to_string()))
}

/// Resolve an IANA timezone name to its rules.
pub fn resolve_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Parse and localize a birth moment in one step.
pub fn normalize_birth_moment(
    date: &str,
    time: &str,
    timezone: &str,
) -> Result<BirthInstant, TimeError> {
    let d = parse_birth_date(date)?;
    let t = parse_birth_time(time)?;
    let tz = resolve_timezone(timezone)?;
    BirthInstant::from_civil(d, t, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_12_hour() {
        let t = parse_birth_time("07:30 PM").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn parse_time_24_hour() {
        let t = parse_birth_time("19:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn parse_time_morning_meridiem() {
        let t = parse_birth_time("12:05 AM").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    }

    #[test]
    fn parse_time_rejects_both_formats() {
        assert_eq!(
            parse_birth_time("13:99"),
            Err(TimeError::InvalidTimeFormat("13:99".to_string()))
        );
    }

    #[test]
    fn parse_date_valid() {
        let d = parse_birth_date("1990-05-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
    }

    #[test]
    fn parse_date_invalid() {
        assert!(matches!(
            parse_birth_date("15/05/1990"),
            Err(TimeError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn unknown_timezone_rejected() {
        assert_eq!(
            resolve_timezone("Mars/Olympus_Mons"),
            Err(TimeError::UnknownTimezone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn known_timezone_resolves() {
        assert!(resolve_timezone("Asia/Kolkata").is_ok());
    }

    #[test]
    fn time_24hr_echo() {
        let b = normalize_birth_moment("1990-05-15", "07:30 PM", "Asia/Kolkata").unwrap();
        assert_eq!(b.time_24hr(), "19:30");
    }
}
