use serde::{Deserialize, Serialize};

text_enum! {
    ForecastKind {
        Transit => "Transit",
        Moon => "Moon",
        Retrograde => "Retrograde",
        Eclipse => "Eclipse",
    }
}

/// One upcoming astrological event, personalized to a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub event: String,
    /// As returned by the model; not normalized.
    pub date: String,
    pub vibe: String,
    pub influence: String,
    #[serde(rename = "type")]
    pub kind: ForecastKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_entry_from_model_json() {
        let json = r#"{"event":"Full Moon in Libra","date":"2026-10-26","vibe":"Reflective","influence":"Balance returns.","type":"moon"}"#;
        let entry: ForecastEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, ForecastKind::Moon);
        assert_eq!(entry.event, "Full Moon in Libra");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"event":"x","date":"d","vibe":"v","influence":"i","type":"Comet"}"#;
        assert!(serde_json::from_str::<ForecastEntry>(json).is_err());
    }
}
