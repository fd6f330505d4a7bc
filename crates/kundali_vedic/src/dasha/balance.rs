//! Birth balance: how much of the opening dasha period remains at birth.
//!
//! The Moon's progress through its birth nakshatra determines the elapsed
//! fraction; the opening period keeps only the remainder.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Compute the birth balance from the Moon's sidereal longitude.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati)
/// - `balance_days`: remaining days of the opening graha's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN;
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (nak_idx, balance_days, elapsed_fraction)
}
