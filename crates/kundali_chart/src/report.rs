//! The Kundali report aggregate and its stable keyed document form.
//!
//! Downstream layers (presentation, conversational) consume the report
//! strictly as a keyed lookup, so the serialized field set is the schema:
//! one entry per planet keyed by English name, the Mahadasha/Antardasha
//! blocks, the derived maps, one sub-map per divisional chart, and the
//! input echo. Absent current periods serialize as an empty object for
//! `Mahadasha`/`Antardasha` and null for `current_dasha`/`current_antardasha`.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use kundali_time::jd_to_calendar;
use kundali_vedic::{DashaPeriod, Graha, Nakshatra, Rashi, Varga, VargaPosition};

/// One planet's placement in the natal (D1) chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPlacement {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    /// Occupied sign.
    pub sign: Rashi,
    /// Occupied whole-sign house (1-12).
    pub house: u8,
    /// Ruler of the occupied house.
    pub house_ruler: Graha,
    /// Dignity label, with the Dig Bala suffix when earned.
    pub strength: String,
    /// Fixed benefic/malefic classification.
    pub benefic: bool,
}

/// A dasha period carried in the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodEntry {
    pub graha: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl From<DashaPeriod> for PeriodEntry {
    fn from(p: DashaPeriod) -> Self {
        Self {
            graha: p.graha,
            start_jd: p.start_jd,
            end_jd: p.end_jd,
        }
    }
}

/// One divisional chart: every planet's remapped position.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaChart {
    pub varga: Varga,
    /// Entries in planet insertion order.
    pub entries: Vec<(Graha, VargaPosition)>,
}

/// The finished Kundali report. Immutable after assembly; no persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth_input: String,
    pub time_of_birth_24hr: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    /// Ascendant longitude in degrees.
    pub ascendant_degree: f64,
    pub ascendant_sign: Rashi,
    /// The Moon's nakshatra at birth.
    pub birth_nakshatra: Nakshatra,
    /// Placements in insertion order (Sun through Ketu).
    pub placements: Vec<PlanetPlacement>,
    /// Ruler of each house, house 1 first.
    pub house_rulers: [Graha; 12],
    /// The full 9-period mahadasha sequence.
    pub dasha_periods: Vec<PeriodEntry>,
    /// Active mahadasha at the reference instant, if any.
    pub current_dasha: Option<PeriodEntry>,
    /// Active antardasha at the reference instant, if any.
    pub current_antardasha: Option<PeriodEntry>,
    /// The five divisional charts, D7 through D60.
    pub divisional_charts: Vec<VargaChart>,
    /// Narrative summary text.
    pub kundali_summary: String,
}

/// Render a JD as a `YYYY-MM-DD` calendar date.
pub(crate) fn jd_date_string(jd: f64) -> String {
    let (year, month, day_frac) = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", year, month, day_frac.floor() as u32)
}

fn period_value(p: &PeriodEntry) -> Value {
    json!({
        "planet": p.graha.english_name(),
        "start_date": jd_date_string(p.start_jd),
        "end_date": jd_date_string(p.end_jd),
    })
}

impl Report {
    /// Build the stable keyed document.
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();

        for p in &self.placements {
            root.insert(
                p.graha.english_name().to_string(),
                json!({
                    "house": p.house,
                    "house_ruler": p.house_ruler.english_name(),
                    "strength": p.strength,
                    "benefic": p.benefic,
                    "position": p.longitude,
                    "sign": p.sign.western_name(),
                }),
            );
        }

        root.insert(
            "Mahadasha".to_string(),
            self.current_dasha
                .as_ref()
                .map_or_else(|| json!({}), period_value),
        );
        root.insert(
            "Antardasha".to_string(),
            self.current_antardasha
                .as_ref()
                .map_or_else(|| json!({}), period_value),
        );

        root.insert(
            "kundali_summary".to_string(),
            Value::String(self.kundali_summary.clone()),
        );

        let mut positions = Map::new();
        let mut in_houses = Map::new();
        for p in &self.placements {
            positions.insert(p.graha.english_name().to_string(), json!(p.longitude));
            in_houses.insert(p.graha.english_name().to_string(), json!(p.house));
        }
        root.insert("planetary_positions".to_string(), Value::Object(positions));
        root.insert("planet_in_houses".to_string(), Value::Object(in_houses));

        let mut rulers = Map::new();
        for (i, ruler) in self.house_rulers.iter().enumerate() {
            rulers.insert((i + 1).to_string(), json!(ruler.english_name()));
        }
        root.insert("house_rulers".to_string(), Value::Object(rulers));

        root.insert(
            "dasha_periods".to_string(),
            Value::Array(self.dasha_periods.iter().map(period_value).collect()),
        );
        root.insert(
            "current_dasha".to_string(),
            self.current_dasha
                .as_ref()
                .map_or(Value::Null, period_value),
        );
        root.insert(
            "current_antardasha".to_string(),
            self.current_antardasha
                .as_ref()
                .map_or(Value::Null, period_value),
        );

        for chart in &self.divisional_charts {
            let mut entries = Map::new();
            for (graha, pos) in &chart.entries {
                entries.insert(
                    graha.english_name().to_string(),
                    json!({
                        "degree": pos.degree,
                        "sign": pos.rashi.western_name(),
                    }),
                );
            }
            root.insert(chart.varga.name().to_string(), Value::Object(entries));
        }

        root.insert(
            "asc_sign_name".to_string(),
            json!(self.ascendant_sign.western_name()),
        );
        root.insert("ascendant".to_string(), json!(self.ascendant_degree));
        root.insert("nakshatra".to_string(), json!(self.birth_nakshatra.name()));

        root.insert("name".to_string(), json!(self.name));
        root.insert("date_of_birth".to_string(), json!(self.date_of_birth));
        root.insert(
            "time_of_birth_input".to_string(),
            json!(self.time_of_birth_input),
        );
        root.insert(
            "time_of_birth_24hr".to_string(),
            json!(self.time_of_birth_24hr),
        );
        root.insert("latitude".to_string(), json!(self.latitude));
        root.insert("longitude".to_string(), json!(self.longitude));
        root.insert("timezone".to_string(), json!(self.timezone));

        Value::Object(root)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_renders_as_calendar_date() {
        assert_eq!(jd_date_string(2_451_545.0), "2000-01-01");
        // JD .5 boundary is midnight
        assert_eq!(jd_date_string(2_460_389.5), "2024-03-20");
    }

    #[test]
    fn period_value_shape() {
        let p = PeriodEntry {
            graha: Graha::Shukra,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + 365.25,
        };
        let v = period_value(&p);
        assert_eq!(v["planet"], "Venus");
        assert_eq!(v["start_date"], "2000-01-01");
        assert_eq!(v["end_date"], "2000-12-31");
    }
}
