//! Bhava (house) placement from whole-sign cusps.
//!
//! Houses partition the ecliptic into 12 contiguous 30-degree arcs starting
//! at each cusp. The scan adjusts for wraparound by lifting the longitude
//! above the tested cusp, and by lifting the first cusp a full turn when
//! testing the 12th house.

use crate::util::normalize_360;

/// Determine which house (1-12) a longitude falls in, given 12 cusps.
///
/// Whole-sign convention: cusp[i] opens house i+1 and the next cusp closes
/// it, half-open. Falls back to house 12 when no interval matches; with
/// well-formed cusps that is a saturating default, not an error.
pub fn bhava_for_longitude(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(longitude);
    for i in 0..12 {
        let cusp = cusps[i];
        let mut next = cusps[(i + 1) % 12];
        if i == 11 {
            next += 360.0;
        }
        let adjusted = if lon >= cusp { lon } else { lon + 360.0 };
        if cusp <= adjusted && adjusted < next {
            return (i as u8) + 1;
        }
    }
    12
}
