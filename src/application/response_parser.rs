//! Turns raw model text into typed records.
//!
//! Models occasionally wrap valid JSON in markdown fences or prose despite
//! schema instructions. Extraction is two-tier:
//!
//! 1. strip fence markers and parse the remainder directly;
//! 2. parse the span between the first opening and the last closing
//!    delimiter of the raw text.
//!
//! Nothing else is attempted: no bracket balancing, quote fixing or
//! trailing-comma removal.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::DomainError;

/// Top-level JSON container the caller expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    fn delimiters(self) -> (char, char) {
        match self {
            JsonShape::Object => ('{', '}'),
            JsonShape::Array => ('[', ']'),
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonShape::Object => write!(f, "object"),
            JsonShape::Array => write!(f, "array"),
        }
    }
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker and trims.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn delimited_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (start < end).then(|| &text[start..=end])
}

/// Parses `raw` into `T` using the two-tier fallback.
///
/// On failure the returned [`DomainError::ResponseParse`] carries `raw`
/// unchanged for diagnostics.
pub fn extract_json<T: DeserializeOwned>(raw: &str, shape: JsonShape) -> Result<T, DomainError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(DomainError::response_parse("empty response", raw));
    }

    let direct_err = match serde_json::from_str::<T>(&cleaned) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    debug!("Direct JSON parse failed ({direct_err}); trying delimited {shape}");

    let (open, close) = shape.delimiters();
    match delimited_span(raw, open, close) {
        Some(span) => serde_json::from_str::<T>(span).map_err(|e| {
            DomainError::response_parse(format!("embedded {shape} is not valid: {e}"), raw)
        }),
        None => Err(DomainError::response_parse(
            format!("no JSON {shape} found: {direct_err}"),
            raw,
        )),
    }
}

/// [`extract_json`] followed by a range check. A value that decodes but
/// violates its invariants is rejected as a parse failure; there is no
/// partial result.
pub fn extract_validated<T, F>(raw: &str, shape: JsonShape, validate: F) -> Result<T, DomainError>
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> Result<(), String>,
{
    let value = extract_json::<T>(raw, shape)?;
    validate(&value).map_err(|reason| DomainError::response_parse(reason, raw))?;
    Ok(value)
}
