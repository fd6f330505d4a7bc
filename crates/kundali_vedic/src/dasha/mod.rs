//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle is anchored to the Moon's nakshatra at
//! birth: the birth nakshatra selects the opening graha, and the fraction
//! of the nakshatra already traversed truncates the opening period. The
//! remaining 8 periods run full-length in the fixed cyclic order.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{
    DAYS_PER_YEAR, DashaPeriod, DashaSnapshot, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
};
pub use vimshottari::{
    antardasha_periods, find_active_period, mahadasha_periods, vimshottari_snapshot,
};
