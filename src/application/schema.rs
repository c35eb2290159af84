//! Output-shape descriptors sent alongside structured requests.
//!
//! Schemas use the OpenAPI subset understood by `generateContent`
//! (`OBJECT`, `ARRAY`, `STRING`, `INTEGER`, `NUMBER`, `BOOLEAN`, `enum`,
//! `required`). Enumerations are generated from the domain vocabularies so the
//! schema and the decoder can never disagree.

use serde_json::{json, Value};

use crate::domain::{
    AspectType, ConnectionType, Dignity, Element, ForecastKind, ZodiacSign, HOUSE_RANGE,
    MAX_DEGREE, MAX_MINUTE,
};

fn string_enum(names: Vec<&'static str>) -> Value {
    json!({ "type": "STRING", "enum": names })
}

fn bounded_integer(min: u32, max: u32) -> Value {
    json!({ "type": "INTEGER", "minimum": min, "maximum": max })
}

pub fn natal_chart_schema() -> Value {
    let sign = string_enum(ZodiacSign::names());
    json!({
        "type": "OBJECT",
        "properties": {
            "sunSign": sign,
            "moonSign": sign,
            "risingSign": sign,
            "summary": { "type": "STRING" },
            "synthesis": { "type": "STRING" },
            "natalChart": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "planet": { "type": "STRING" },
                        "sign": sign,
                        "degree": bounded_integer(0, MAX_DEGREE),
                        "minute": bounded_integer(0, MAX_MINUTE),
                        "isRetrograde": { "type": "BOOLEAN" },
                        "house": bounded_integer(*HOUSE_RANGE.start(), *HOUSE_RANGE.end()),
                        "dignity": string_enum(Dignity::names()),
                        "element": string_enum(Element::names())
                    },
                    "required": ["planet", "sign", "degree", "minute", "isRetrograde", "house"]
                }
            },
            "aspects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "planet1": { "type": "STRING" },
                        "planet2": { "type": "STRING" },
                        "type": string_enum(AspectType::names()),
                        "orb": { "type": "NUMBER" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["planet1", "planet2", "type", "orb", "description"]
                }
            }
        },
        "required": ["sunSign", "moonSign", "risingSign", "summary", "natalChart", "aspects", "synthesis"]
    })
}

fn aspect_highlight_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "vibe": { "type": "STRING" }
        },
        "required": ["title", "description", "vibe"]
    })
}

pub fn compatibility_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER", "minimum": 0, "maximum": 100 },
            "summary": { "type": "STRING" },
            "pros": { "type": "ARRAY", "items": { "type": "STRING" } },
            "cons": { "type": "ARRAY", "items": { "type": "STRING" } },
            "connectionType": string_enum(ConnectionType::names()),
            "sunMoonAspect": aspect_highlight_schema(),
            "venusMarsAspect": aspect_highlight_schema()
        },
        "required": ["score", "summary", "pros", "cons", "connectionType", "sunMoonAspect", "venusMarsAspect"]
    })
}

pub fn forecast_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "event": { "type": "STRING" },
                "date": { "type": "STRING" },
                "vibe": { "type": "STRING" },
                "influence": { "type": "STRING" },
                "type": string_enum(ForecastKind::names())
            },
            "required": ["event", "date", "vibe", "influence", "type"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natal_chart_schema_requires_all_top_level_fields() {
        let schema = natal_chart_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required.len(), 7);
        assert!(required.contains(&"natalChart"));
        assert_eq!(
            schema["properties"]["natalChart"]["items"]["properties"]["house"]["maximum"],
            12
        );
    }

    #[test]
    fn compatibility_schema_enumerates_connection_types() {
        let schema = compatibility_schema();
        assert_eq!(
            schema["properties"]["connectionType"]["enum"],
            json!(["Soulmate", "Twin Flame", "Karmic", "Steady"])
        );
    }

    #[test]
    fn forecast_schema_is_an_array() {
        let schema = forecast_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["properties"]["type"]["enum"],
            json!(["Transit", "Moon", "Retrograde", "Eclipse"])
        );
    }
}
