//! The `Ephemeris` trait and the 9-graha longitude assembly.
//!
//! The sidereal mode is an argument to every query. Implementations that
//! wrap a process-wide handle with implicit mode state must re-establish
//! the mode on each call; two queries in one chart computation must never
//! mix sidereal frames.

use kundali_vedic::{Graha, SAPTA_GRAHAS, normalize_360};

use crate::error::EphemerisError;

/// Sidereal reference system for longitude queries.
///
/// One chart computation uses a single mode for every longitude and house
/// query; the engine uses `Lahiri` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ayanamsha {
    #[default]
    Lahiri,
    Raman,
    Krishnamurti,
}

impl Ayanamsha {
    /// Display name of the sidereal system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
        }
    }
}

/// Geographic location of the birth place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

/// Whole-sign house cusps plus the ascendant longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    /// 12 cusp longitudes in degrees, house 1 first.
    pub cusps: [f64; 12],
    /// Ascendant longitude in degrees.
    pub ascendant: f64,
}

/// External ephemeris provider boundary.
///
/// Both queries take the instant as a Julian Day in universal time and the
/// sidereal mode explicitly.
pub trait Ephemeris {
    /// Sidereal ecliptic longitude of a directly-observed body, in degrees.
    ///
    /// Callers never pass `Graha::Ketu`; providers reject it with
    /// [`EphemerisError::UnsupportedBody`].
    fn sidereal_longitude(
        &self,
        jd_ut: f64,
        graha: Graha,
        ayanamsha: Ayanamsha,
    ) -> Result<f64, EphemerisError>;

    /// Whole-sign house cusps and ascendant for an instant and location.
    fn houses_and_ascendant(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        ayanamsha: Ayanamsha,
    ) -> Result<HouseCusps, EphemerisError>;
}

/// Sidereal longitudes of all 9 grahas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    /// Longitudes indexed by `Graha::index()` (0-8).
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Get the sidereal longitude for a specific graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }
}

/// Query the 7 classical grahas plus Rahu and derive Ketu.
///
/// Ketu is always `(Rahu + 180) mod 360`, never queried. All 8 queries use
/// the same sidereal mode.
pub fn graha_sidereal_longitudes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    ayanamsha: Ayanamsha,
) -> Result<GrahaLongitudes, EphemerisError> {
    let mut longitudes = [0.0; 9];

    for graha in SAPTA_GRAHAS {
        longitudes[graha.index() as usize] =
            ephemeris.sidereal_longitude(jd_ut, graha, ayanamsha)?;
    }

    let rahu = ephemeris.sidereal_longitude(jd_ut, Graha::Rahu, ayanamsha)?;
    longitudes[Graha::Rahu.index() as usize] = rahu;
    longitudes[Graha::Ketu.index() as usize] = normalize_360(rahu + 180.0);

    Ok(GrahaLongitudes { longitudes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedEphemeris;

    #[test]
    fn ketu_is_rahu_plus_half_turn() {
        for rahu in [0.0, 15.0, 179.9, 180.0, 250.0, 359.5] {
            let eph = FixedEphemeris::new([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, rahu], 0.0);
            let longs = graha_sidereal_longitudes(&eph, 2_451_545.0, Ayanamsha::Lahiri).unwrap();
            let ketu = longs.longitude(Graha::Ketu);
            assert!(
                (ketu - normalize_360(rahu + 180.0)).abs() < 1e-12,
                "rahu {rahu} -> ketu {ketu}"
            );
        }
    }

    #[test]
    fn all_nine_longitudes_populated() {
        let eph = FixedEphemeris::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 0.0);
        let longs = graha_sidereal_longitudes(&eph, 2_451_545.0, Ayanamsha::Lahiri).unwrap();
        assert!((longs.longitude(Graha::Surya) - 1.0).abs() < 1e-12);
        assert!((longs.longitude(Graha::Shani) - 7.0).abs() < 1e-12);
        assert!((longs.longitude(Graha::Rahu) - 8.0).abs() < 1e-12);
        assert!((longs.longitude(Graha::Ketu) - 188.0).abs() < 1e-12);
    }

    #[test]
    fn default_mode_is_lahiri() {
        assert_eq!(Ayanamsha::default(), Ayanamsha::Lahiri);
    }
}
