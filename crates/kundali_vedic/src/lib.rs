//! Pure sidereal math for Kundali computation.
//!
//! This crate provides:
//! - Graha (planet) and rashi (sign) enums with classical lordship
//! - Rashi and nakshatra resolution from sidereal longitudes
//! - Whole-sign house placement from ephemeris cusps
//! - Vimshottari dasha period generation and active-period queries
//! - Divisional (varga) chart mappings for D7, D9, D10, D12, D60
//! - Dignity classification (exaltation, debilitation, ownership, Dig Bala)
//!
//! Everything here is a total function of its inputs; nothing reads the
//! clock or talks to an ephemeris.

pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod varga;

pub use bhava::bhava_for_longitude;
pub use dasha::{
    DAYS_PER_YEAR, DashaPeriod, DashaSnapshot, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
    antardasha_periods, find_active_period, mahadasha_periods, nakshatra_birth_balance,
    vimshottari_snapshot,
};
pub use dignity::{
    Dignity, debilitation_sign, dig_bala_house, dignity_of, exaltation_sign, has_dig_bala,
    owned_signs,
};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo,
    nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use util::normalize_360;
pub use varga::{ALL_VARGAS, Varga, VargaPosition, varga_position};
