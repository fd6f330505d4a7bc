//! Ephemeris adapter boundary.
//!
//! This crate provides:
//! - The `Ephemeris` trait the calculation engine consumes
//! - Sidereal mode (`Ayanamsha`) passed explicitly to every query
//! - 9-graha longitude assembly with the Ketu = Rahu + 180 rule
//! - A deterministic table-backed provider for tests and offline use
//!
//! Orbital mechanics stay outside this workspace; any provider that can
//! answer the two trait queries plugs in.

pub mod adapter;
pub mod error;
pub mod fixed;

pub use adapter::{
    Ayanamsha, Ephemeris, GeoLocation, GrahaLongitudes, HouseCusps, graha_sidereal_longitudes,
};
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
