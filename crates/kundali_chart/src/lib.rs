//! Kundali chart computation: the top-level assembly over the engine crates.
//!
//! This crate provides:
//! - `compute_chart`: birth details + ephemeris + reference instant → Report
//! - Dignity labeling and house-ruler derivation for the D1 chart
//! - The Report aggregate with its stable keyed document form
//!
//! Each computation is a pure function of its inputs and the ephemeris's
//! responses; nothing is cached or shared across requests. The reference
//! instant used for "current" period lookups is an explicit parameter —
//! `compute_chart_now` reads the wall clock exactly once and delegates.

pub mod error;
pub mod report;
pub mod summary;

use log::debug;

use kundali_ephem::{Ayanamsha, Ephemeris, GeoLocation, graha_sidereal_longitudes};
use kundali_time::{current_jd, normalize_birth_moment};
use kundali_vedic::{
    ALL_GRAHAS, ALL_RASHIS, ALL_VARGAS, Graha, Rashi, bhava_for_longitude, dignity_of,
    has_dig_bala, mahadasha_periods, nakshatra_from_longitude, nth_rashi_from,
    rashi_from_longitude, rashi_lord, varga_position, vimshottari_snapshot,
};

pub use error::ChartError;
pub use report::{PeriodEntry, PlanetPlacement, Report, VargaChart};
pub use summary::kundali_summary;

/// Birth details as received from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthDetails {
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Clock time, `HH:MM AM/PM` or 24-hour `HH:MM`.
    pub time_of_birth: String,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// IANA timezone name.
    pub timezone: String,
}

/// Ruler of each whole-sign house for a given ascendant sign.
///
/// House h occupies the sign h - 1 places after the ascendant sign; its
/// ruler is that sign's classical lord.
pub fn house_rulers(ascendant_sign: Rashi) -> [Graha; 12] {
    let asc_idx = ascendant_sign.index();
    let mut rulers = [Graha::Surya; 12];
    for house in 1..=12u8 {
        let sign_idx = nth_rashi_from(asc_idx, house);
        rulers[(house - 1) as usize] = rashi_lord(ALL_RASHIS[sign_idx as usize]);
    }
    rulers
}

/// Dignity label for a placement, with the Dig Bala suffix when earned.
pub fn strength_label(graha: Graha, sign: Rashi, house: u8) -> String {
    let mut label = dignity_of(graha, sign).label().to_string();
    if has_dig_bala(graha, house) {
        label.push_str(" + Dig Bala");
    }
    label
}

/// Compute a full Kundali report.
///
/// `reference_jd` is the instant (JD UT) against which the active
/// mahadasha/antardasha are located; passing it explicitly keeps results
/// reproducible. Fails on unparseable inputs or ephemeris errors; an
/// out-of-cycle reference instant yields absent current periods, not an
/// error.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    details: &BirthDetails,
    reference_jd: f64,
) -> Result<Report, ChartError> {
    let instant = normalize_birth_moment(
        &details.date_of_birth,
        &details.time_of_birth,
        &details.timezone,
    )?;
    let jd_birth = instant.julian_day;
    debug!("birth instant {} -> JD {jd_birth}", instant.utc);

    // One sidereal mode for every query in this computation.
    let ayanamsha = Ayanamsha::Lahiri;
    let longitudes = graha_sidereal_longitudes(ephemeris, jd_birth, ayanamsha)?;
    let location = GeoLocation {
        latitude_deg: details.latitude,
        longitude_deg: details.longitude,
    };
    let houses = ephemeris.houses_and_ascendant(jd_birth, &location, ayanamsha)?;
    debug!(
        "ascendant {:.4} deg, cusp ring starts at {:.4}",
        houses.ascendant, houses.cusps[0]
    );

    let asc = rashi_from_longitude(houses.ascendant);
    let rulers = house_rulers(asc.rashi);

    let mut placements = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let lon = longitudes.longitude(graha);
        let sign = rashi_from_longitude(lon).rashi;
        let house = bhava_for_longitude(lon, &houses.cusps);
        placements.push(PlanetPlacement {
            graha,
            longitude: lon,
            sign,
            house,
            house_ruler: rulers[(house - 1) as usize],
            strength: strength_label(graha, sign, house),
            benefic: graha.is_benefic(),
        });
    }

    let moon_lon = longitudes.longitude(Graha::Chandra);
    let birth_nakshatra = nakshatra_from_longitude(moon_lon).nakshatra;

    let mahadashas = mahadasha_periods(jd_birth, moon_lon);
    let snapshot = vimshottari_snapshot(&mahadashas, reference_jd);
    debug!(
        "active mahadasha at JD {reference_jd}: {:?}",
        snapshot.mahadasha.map(|p| p.graha.english_name())
    );

    let divisional_charts = ALL_VARGAS
        .iter()
        .map(|&varga| VargaChart {
            varga,
            entries: ALL_GRAHAS
                .iter()
                .map(|&g| (g, varga_position(varga, longitudes.longitude(g))))
                .collect(),
        })
        .collect();

    let current_dasha: Option<PeriodEntry> = snapshot.mahadasha.map(Into::into);
    let current_antardasha: Option<PeriodEntry> = snapshot.antardasha.map(Into::into);

    let kundali_summary = summary::kundali_summary(
        &placements,
        asc.rashi,
        houses.ascendant,
        birth_nakshatra,
        current_dasha.as_ref(),
        current_antardasha.as_ref(),
    );

    Ok(Report {
        name: details.name.clone(),
        date_of_birth: details.date_of_birth.clone(),
        time_of_birth_input: details.time_of_birth.clone(),
        time_of_birth_24hr: instant.time_24hr(),
        latitude: details.latitude,
        longitude: details.longitude,
        timezone: details.timezone.clone(),
        ascendant_degree: houses.ascendant,
        ascendant_sign: asc.rashi,
        birth_nakshatra,
        placements,
        house_rulers: rulers,
        dasha_periods: mahadashas.into_iter().map(Into::into).collect(),
        current_dasha,
        current_antardasha,
        divisional_charts,
        kundali_summary,
    })
}

/// Compute a chart against the present wall-clock instant.
pub fn compute_chart_now<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    details: &BirthDetails,
) -> Result<Report, ChartError> {
    compute_chart(ephemeris, details, current_jd())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_ascendant_house_rulers() {
        // House 5 from Mesha is Simha, ruled by Surya
        let rulers = house_rulers(Rashi::Mesha);
        assert_eq!(rulers[0], Graha::Mangal);
        assert_eq!(rulers[4], Graha::Surya);
        assert_eq!(rulers[6], Graha::Shukra);
        assert_eq!(rulers[11], Graha::Guru);
    }

    #[test]
    fn shifted_ascendant_house_rulers() {
        // From Karka, house 2 is Simha (Surya), house 12 is Mithuna (Buddh)
        let rulers = house_rulers(Rashi::Karka);
        assert_eq!(rulers[0], Graha::Chandra);
        assert_eq!(rulers[1], Graha::Surya);
        assert_eq!(rulers[11], Graha::Buddh);
    }

    #[test]
    fn strength_label_with_dig_bala() {
        assert_eq!(
            strength_label(Graha::Surya, Rashi::Mesha, 1),
            "Exalted + Dig Bala"
        );
        assert_eq!(strength_label(Graha::Surya, Rashi::Mesha, 2), "Exalted");
        assert_eq!(
            strength_label(Graha::Shani, Rashi::Makara, 10),
            "Strong + Dig Bala"
        );
        assert_eq!(strength_label(Graha::Rahu, Rashi::Mesha, 1), "Neutral");
    }
}
