//! Julian Date ↔ Gregorian calendar conversions in universal time.
//!
//! The Julian Day is the continuous day count the ephemeris consumes; the
//! fractional part encodes time-of-day to sub-second precision.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the time-of-day fraction
/// (e.g. 15.5 = the 15th at 12:00 UT).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;

    let (y2, m2) = if m <= 2.0 {
        (y - 1.0, m + 12.0)
    } else {
        (y, m)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian Date of a UTC timestamp.
pub fn datetime_to_jd(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.second() as f64 + f64::from(utc.nanosecond()) * 1e-9;
    let day_frac = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + seconds / SECONDS_PER_DAY;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

/// Julian Date of the present wall-clock instant.
pub fn current_jd() -> f64 {
    datetime_to_jd(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn gregorian_epoch_midnight() {
        // 2024-03-20 00:00 UT
        let jd = calendar_to_jd(2024, 3, 20.0);
        assert!((jd - 2_460_389.5).abs() < 1e-9);
    }

    #[test]
    fn calendar_roundtrip() {
        let jd = calendar_to_jd(1990, 5, 15.4375);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 1990);
        assert_eq!(m, 5);
        assert!((d - 15.4375).abs() < 1e-8);
    }

    #[test]
    fn calendar_roundtrip_january() {
        // January exercises the month <= 2 branch both ways
        let jd = calendar_to_jd(1987, 1, 27.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 1987);
        assert_eq!(m, 1);
        assert!((d - 27.0).abs() < 1e-8);
    }

    #[test]
    fn datetime_to_jd_j2000() {
        let utc = chrono::Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((datetime_to_jd(&utc) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn datetime_to_jd_subsecond() {
        let base = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 6, 30, 15).unwrap();
        let jd = datetime_to_jd(&base);
        let (_, _, day_frac) = jd_to_calendar(jd);
        let seconds_of_day = day_frac.fract() * SECONDS_PER_DAY;
        let expected = 6.0 * 3600.0 + 30.0 * 60.0 + 15.0;
        assert!((seconds_of_day - expected).abs() < 1e-3);
    }
}
