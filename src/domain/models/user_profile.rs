use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChartRequest, ChartSubject, NatalChart};

/// The persisted "current user": birth data plus the chart computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: String,
    #[serde(flatten)]
    birth: ChartRequest,
    #[serde(default)]
    bio: String,
    chart: NatalChart,
}

impl UserProfile {
    pub fn new(birth: ChartRequest, chart: NatalChart) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            birth,
            bio: String::new(),
            chart,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Replaces the chart after a recalculation, keeping identity and bio.
    pub fn with_chart(mut self, chart: NatalChart) -> Self {
        self.chart = chart;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.birth.name
    }

    pub fn birth(&self) -> &ChartRequest {
        &self.birth
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn chart(&self) -> &NatalChart {
        &self.chart
    }

    pub fn subject(&self) -> ChartSubject<'_> {
        ChartSubject::new(&self.birth.name, &self.chart)
    }
}
