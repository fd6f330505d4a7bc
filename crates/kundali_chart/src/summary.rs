//! Narrative summary generation.
//!
//! One line per placement in insertion order, then the current periods.
//! Absent periods print "Not Found" verbatim.

use std::fmt::Write;

use kundali_vedic::{Nakshatra, Rashi};

use crate::report::{PeriodEntry, PlanetPlacement, jd_date_string};

/// Compose the textual Kundali summary.
pub fn kundali_summary(
    placements: &[PlanetPlacement],
    ascendant_sign: Rashi,
    ascendant_degree: f64,
    birth_nakshatra: Nakshatra,
    current_dasha: Option<&PeriodEntry>,
    current_antardasha: Option<&PeriodEntry>,
) -> String {
    let mut summary = format!(
        "Kundali Report Summary:\n\
         Ascendant (Lagna): {} ({:.2}°)\n\
         Nakshatra: {}\n\n\
         Planetary Positions:\n",
        ascendant_sign.western_name(),
        ascendant_degree,
        birth_nakshatra.name(),
    );

    for p in placements {
        let _ = writeln!(
            summary,
            "{}: {:.2}° in {}, House {} ({}), Strength: {}, Nature: {}",
            p.graha.english_name(),
            p.longitude,
            p.sign.western_name(),
            p.house,
            p.house_ruler.english_name(),
            p.strength,
            if p.benefic { "Benefic" } else { "Malefic" },
        );
    }

    match current_dasha {
        Some(d) => {
            let _ = writeln!(
                summary,
                "\nCurrent Mahadasha: {} (from {} to {})",
                d.graha.english_name(),
                jd_date_string(d.start_jd),
                jd_date_string(d.end_jd),
            );
        }
        None => summary.push_str("\nCurrent Mahadasha: Not Found\n"),
    }
    match current_antardasha {
        Some(a) => {
            let _ = writeln!(
                summary,
                "Current Antardasha: {} (from {} to {})",
                a.graha.english_name(),
                jd_date_string(a.start_jd),
                jd_date_string(a.end_jd),
            );
        }
        None => summary.push_str("Current Antardasha: Not Found\n"),
    }

    summary
}
