//! Deterministic table-backed ephemeris provider.
//!
//! Serves fixed longitudes and whole-sign cusps regardless of the queried
//! instant. Used by the integration tests and for offline development,
//! the same way a production provider would plug in.

use kundali_vedic::{Graha, normalize_360, rashi_from_longitude};

use crate::adapter::{Ayanamsha, Ephemeris, GeoLocation, HouseCusps};
use crate::error::EphemerisError;

/// An ephemeris backed by a fixed longitude table.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    /// Longitudes for Surya..Rahu, indexed by `Graha::index()` (0-7).
    longitudes: [f64; 8],
    /// Ascendant longitude; cusps derive from its sign start.
    ascendant: f64,
}

impl FixedEphemeris {
    /// Build from 8 body longitudes (Surya through Rahu) and an ascendant.
    ///
    /// Whole-sign cusps are derived from the ascendant's sign boundary.
    pub fn new(longitudes: [f64; 8], ascendant: f64) -> Self {
        Self {
            longitudes,
            ascendant: normalize_360(ascendant),
        }
    }

    /// The whole-sign cusp ring implied by the ascendant.
    fn cusps(&self) -> [f64; 12] {
        let first = rashi_from_longitude(self.ascendant).rashi_index as f64 * 30.0;
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_360(first + i as f64 * 30.0);
        }
        cusps
    }
}

impl Ephemeris for FixedEphemeris {
    fn sidereal_longitude(
        &self,
        _jd_ut: f64,
        graha: Graha,
        _ayanamsha: Ayanamsha,
    ) -> Result<f64, EphemerisError> {
        match graha {
            Graha::Ketu => Err(EphemerisError::UnsupportedBody(Graha::Ketu)),
            _ => Ok(normalize_360(self.longitudes[graha.index() as usize])),
        }
    }

    fn houses_and_ascendant(
        &self,
        _jd_ut: f64,
        _location: &GeoLocation,
        _ayanamsha: Ayanamsha,
    ) -> Result<HouseCusps, EphemerisError> {
        Ok(HouseCusps {
            cusps: self.cusps(),
            ascendant: self.ascendant,
        })
    }
}
