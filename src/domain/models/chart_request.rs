use serde::{Deserialize, Serialize};

/// Birth data for a single chart calculation.
///
/// All fields are opaque strings handed to the model verbatim; the adapter
/// never interprets dates, times or places itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_location: String,
}

impl ChartRequest {
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        birth_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            birth_location: birth_location.into(),
        }
    }

    /// Names the first blank field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("birth date", &self.birth_date),
            ("birth time", &self.birth_time),
            ("birth location", &self.birth_location),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}
