//! Vimshottari mahadasha/antardasha generation and active-period queries.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

use super::balance::nakshatra_birth_balance;
use super::types::{
    DAYS_PER_YEAR, DashaPeriod, DashaSnapshot, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
};

/// Generate the 9 mahadasha periods for a birth chart.
///
/// The birth nakshatra selects the opening graha at cyclic position
/// `nakshatra_index mod 9`; the opening period is truncated to the birth
/// balance and the remaining 8 run full-length, chained with no gaps,
/// spanning 120 years from birth minus the elapsed fraction.
pub fn mahadasha_periods(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let start_idx = nak_idx % 9;

    let entry_years = VIMSHOTTARI_SEQUENCE[start_idx].1;
    let (_nak, balance_days, _frac) = nakshatra_birth_balance(lon, entry_years * DAYS_PER_YEAR);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;

    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (graha, years) = VIMSHOTTARI_SEQUENCE[(start_idx + offset) % 9];
        let duration = if offset == 0 {
            balance_days
        } else {
            years * DAYS_PER_YEAR
        };

        let end = cursor + duration;
        periods.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
        });
        cursor = end;
    }

    periods
}

/// Subdivide a mahadasha into its 9 antardasha periods.
///
/// The sub-sequence starts from the mahadasha's own graha and cycles
/// through the fixed order; each child's duration is its canonical share
/// of the 120-year cycle scaled to the parent's actual duration. The last
/// child's end is snapped to the parent's end to absorb float drift.
pub fn antardasha_periods(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let start_idx = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == parent.graha)
        .unwrap_or(0);

    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (graha, years) = VIMSHOTTARI_SEQUENCE[(start_idx + offset) % 9];
        let duration = (years / VIMSHOTTARI_TOTAL_YEARS) * parent_duration;

        let end = cursor + duration;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
        });
        cursor = end;
    }

    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

/// Find the index of the period containing the query instant, if any.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(query_jd))
}

/// Locate the active mahadasha and antardasha at a query instant.
///
/// Outside the 120-year span both slots are absent; the caller reports
/// that state rather than failing.
pub fn vimshottari_snapshot(mahadashas: &[DashaPeriod], query_jd: f64) -> DashaSnapshot {
    let mut snapshot = DashaSnapshot {
        query_jd,
        mahadasha: None,
        antardasha: None,
    };

    if let Some(idx) = find_active_period(mahadashas, query_jd) {
        let maha = mahadashas[idx];
        snapshot.mahadasha = Some(maha);

        let children = antardasha_periods(&maha);
        if let Some(cidx) = find_active_period(&children, query_jd) {
            snapshot.antardasha = Some(children[cidx]);
        }
    }

    snapshot
}
