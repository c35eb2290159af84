use serde::{Deserialize, Serialize};

use super::{AspectType, Dignity, Element, ZodiacSign};

pub const MAX_DEGREE: u32 = 29;
pub const MAX_MINUTE: u32 = 59;
pub const HOUSE_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    pub planet: String,
    pub sign: ZodiacSign,
    /// Whole degrees within the sign, 0-29.
    pub degree: u32,
    /// Arc minutes, 0-59.
    pub minute: u32,
    pub is_retrograde: bool,
    /// Placidus house, 1-12.
    pub house: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dignity: Option<Dignity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

impl PlanetaryPosition {
    pub fn validate(&self) -> Result<(), String> {
        if self.degree > MAX_DEGREE {
            return Err(format!(
                "{}: degree {} outside 0-{MAX_DEGREE}",
                self.planet, self.degree
            ));
        }
        if self.minute > MAX_MINUTE {
            return Err(format!(
                "{}: minute {} outside 0-{MAX_MINUTE}",
                self.planet, self.minute
            ));
        }
        if !HOUSE_RANGE.contains(&self.house) {
            return Err(format!("{}: house {} outside 1-12", self.planet, self.house));
        }
        Ok(())
    }

    /// e.g. `Venus 14°07' Taurus (H10) R`
    pub fn display_line(&self) -> String {
        let retro = if self.is_retrograde { " R" } else { "" };
        format!(
            "{} {}°{:02}' {} (H{}){}",
            self.planet, self.degree, self.minute, self.sign, self.house, retro
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAspect {
    pub planet1: String,
    pub planet2: String,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    pub orb: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
    pub summary: String,
    pub synthesis: String,
    #[serde(rename = "natalChart")]
    pub positions: Vec<PlanetaryPosition>,
    pub aspects: Vec<ChartAspect>,
}

impl NatalChart {
    /// Checks every documented range. The first violation wins.
    pub fn validate(&self) -> Result<(), String> {
        for position in &self.positions {
            position.validate()?;
        }
        for aspect in &self.aspects {
            if !aspect.orb.is_finite() || aspect.orb < 0.0 {
                return Err(format!(
                    "{}-{}: orb {} is not a non-negative number",
                    aspect.planet1, aspect.planet2, aspect.orb
                ));
            }
        }
        Ok(())
    }

    pub fn planet(&self, name: &str) -> Option<&PlanetaryPosition> {
        self.positions
            .iter()
            .find(|p| p.planet.eq_ignore_ascii_case(name.trim()))
    }

    pub fn retrograde_planets(&self) -> impl Iterator<Item = &PlanetaryPosition> {
        self.positions.iter().filter(|p| p.is_retrograde)
    }
}

/// A named, already-computed chart handed to synastry and forecast calls.
///
/// Borrowed so the adapter can never alter the caller's chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartSubject<'a> {
    pub name: &'a str,
    pub chart: &'a NatalChart,
}

impl<'a> ChartSubject<'a> {
    pub fn new(name: &'a str, chart: &'a NatalChart) -> Self {
        Self { name, chart }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn sample_chart() -> NatalChart {
        NatalChart {
            sun_sign: ZodiacSign::Aries,
            moon_sign: ZodiacSign::Cancer,
            rising_sign: ZodiacSign::Libra,
            summary: "Fiery initiator with a tender core.".to_string(),
            synthesis: "A soul that leads with courage and retreats to feel.".to_string(),
            positions: vec![
                PlanetaryPosition {
                    planet: "Sun".to_string(),
                    sign: ZodiacSign::Aries,
                    degree: 1,
                    minute: 12,
                    is_retrograde: false,
                    house: 7,
                    dignity: Some(Dignity::Exaltation),
                    element: Some(Element::Fire),
                },
                PlanetaryPosition {
                    planet: "Mercury".to_string(),
                    sign: ZodiacSign::Pisces,
                    degree: 22,
                    minute: 48,
                    is_retrograde: true,
                    house: 6,
                    dignity: Some(Dignity::Fall),
                    element: Some(Element::Water),
                },
            ],
            aspects: vec![ChartAspect {
                planet1: "Sun".to_string(),
                planet2: "Mercury".to_string(),
                aspect_type: AspectType::Conjunction,
                orb: 2.6,
                description: "Thought follows will.".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_chart;
    use super::*;

    #[test]
    fn test_sample_chart_is_valid() {
        assert!(sample_chart().validate().is_ok());
    }

    #[test]
    fn test_degree_out_of_range_rejected() {
        let mut chart = sample_chart();
        chart.positions[0].degree = 30;
        let err = chart.validate().unwrap_err();
        assert!(err.contains("degree 30"));
    }

    #[test]
    fn test_minute_out_of_range_rejected() {
        let mut chart = sample_chart();
        chart.positions[1].minute = 60;
        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_house_bounds() {
        let mut chart = sample_chart();
        chart.positions[0].house = 0;
        assert!(chart.validate().is_err());
        chart.positions[0].house = 13;
        assert!(chart.validate().is_err());
        chart.positions[0].house = 12;
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn test_negative_orb_rejected() {
        let mut chart = sample_chart();
        chart.aspects[0].orb = -1.0;
        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_chart()).unwrap();
        assert!(json.get("natalChart").is_some());
        assert!(json.get("sunSign").is_some());
        assert_eq!(json["natalChart"][1]["isRetrograde"], true);
        assert_eq!(json["aspects"][0]["type"], "Conjunction");
    }

    #[test]
    fn test_optional_dignity_and_element_may_be_absent() {
        let json = r#"{"planet":"Moon","sign":"cancer","degree":3,"minute":0,"isRetrograde":false,"house":4}"#;
        let position: PlanetaryPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.sign, ZodiacSign::Cancer);
        assert!(position.dignity.is_none());
        assert!(position.element.is_none());
    }

    #[test]
    fn test_planet_lookup_and_retrogrades() {
        let chart = sample_chart();
        assert_eq!(chart.planet("mercury").map(|p| p.degree), Some(22));
        assert!(chart.planet("Pluto").is_none());
        assert_eq!(chart.retrograde_planets().count(), 1);
    }

    #[test]
    fn test_display_line() {
        let chart = sample_chart();
        assert_eq!(chart.positions[1].display_line(), "Mercury 22°48' Pisces (H6) R");
    }
}
