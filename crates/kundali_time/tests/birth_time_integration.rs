//! Integration tests for birth-moment normalization across real zones.

use kundali_time::{J2000_JD, TimeError, normalize_birth_moment};

#[test]
fn utc_noon_j2000() {
    let b = normalize_birth_moment("2000-01-01", "12:00", "UTC").unwrap();
    assert!((b.julian_day - J2000_JD).abs() < 1e-9);
}

#[test]
fn twelve_and_twenty_four_hour_agree() {
    let a = normalize_birth_moment("1990-05-15", "07:30 PM", "Asia/Kolkata").unwrap();
    let b = normalize_birth_moment("1990-05-15", "19:30", "Asia/Kolkata").unwrap();
    assert_eq!(a.utc, b.utc);
    assert!((a.julian_day - b.julian_day).abs() < 1e-12);
}

#[test]
fn kolkata_offset_applied() {
    // IST is UTC+5:30 year-round
    let b = normalize_birth_moment("1990-05-15", "10:30", "Asia/Kolkata").unwrap();
    assert_eq!(b.utc.to_string(), "1990-05-15 05:00:00 UTC");
}

#[test]
fn local_and_utc_agree_to_the_second() {
    let b = normalize_birth_moment("1985-11-02", "04:15 AM", "America/New_York").unwrap();
    assert_eq!(b.local.timestamp(), b.utc.timestamp());
}

#[test]
fn fall_back_ambiguity_resolves_to_standard_offset() {
    // 2024-11-03 01:30 occurs twice in New York; the standard-time (EST)
    // reading maps to 06:30 UTC.
    let b = normalize_birth_moment("2024-11-03", "01:30", "America/New_York").unwrap();
    assert_eq!(b.utc.to_string(), "2024-11-03 06:30:00 UTC");
}

#[test]
fn spring_forward_gap_is_an_error() {
    // 2024-03-10 02:30 does not exist in New York
    let err = normalize_birth_moment("2024-03-10", "02:30", "America/New_York").unwrap_err();
    assert!(matches!(err, TimeError::NonexistentLocalTime { .. }));
}

#[test]
fn malformed_time_surfaces_input() {
    let err = normalize_birth_moment("2000-01-01", "13:99", "UTC").unwrap_err();
    assert_eq!(err, TimeError::InvalidTimeFormat("13:99".to_string()));
}

#[test]
fn unknown_zone_surfaces_name() {
    let err = normalize_birth_moment("2000-01-01", "12:00", "Atlantis/Capital").unwrap_err();
    assert_eq!(err, TimeError::UnknownTimezone("Atlantis/Capital".to_string()));
}
