use serde::{Deserialize, Serialize};

pub const MAX_SCORE: f64 = 100.0;

text_enum! {
    ConnectionType {
        Soulmate => "Soulmate",
        TwinFlame => "Twin Flame",
        Karmic => "Karmic",
        Steady => "Steady",
    }
}

/// The single most influential aspect along one synastry axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectHighlight {
    pub title: String,
    pub description: String,
    pub vibe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub score: f64,
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub connection_type: ConnectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun_moon_aspect: Option<AspectHighlight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venus_mars_aspect: Option<AspectHighlight>,
}

impl CompatibilityResult {
    pub fn validate(&self) -> Result<(), String> {
        if !self.score.is_finite() || !(0.0..=MAX_SCORE).contains(&self.score) {
            return Err(format!("score {} outside 0-100", self.score));
        }
        Ok(())
    }

    /// Score rounded to a whole percentage for display.
    pub fn percent(&self) -> u8 {
        self.score.round().clamp(0.0, MAX_SCORE) as u8
    }

    pub fn highlights(&self) -> impl Iterator<Item = &AspectHighlight> {
        self.sun_moon_aspect
            .iter()
            .chain(self.venus_mars_aspect.iter())
    }
}
