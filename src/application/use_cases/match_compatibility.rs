use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::application::prompts::{compatibility_prompt, ASTROLOGER_SYSTEM_PROMPT};
use crate::application::response_parser::{extract_validated, JsonShape};
use crate::application::schema::compatibility_schema;
use crate::application::{AdapterSettings, ChatClient, CompletionRequest};
use crate::domain::{ChartSubject, CompatibilityResult, DomainError};

/// Synastry between two computed charts.
///
/// Strict: parse failures and scores outside 0-100 propagate to the caller.
pub struct MatchCompatibilityUseCase {
    client: Arc<dyn ChatClient>,
    model: String,
    thinking_budget: Option<u32>,
    schema: Value,
}

impl MatchCompatibilityUseCase {
    pub fn new(client: Arc<dyn ChatClient>, settings: &AdapterSettings) -> Self {
        Self {
            client,
            model: settings.reasoning_model.clone(),
            thinking_budget: settings.compatibility_thinking_budget,
            schema: compatibility_schema(),
        }
    }

    pub async fn execute(
        &self,
        subject: ChartSubject<'_>,
        candidate: ChartSubject<'_>,
    ) -> Result<CompatibilityResult, DomainError> {
        info!("Scoring compatibility: {} x {}", subject.name, candidate.name);
        let prompt = compatibility_prompt(subject, candidate)?;
        let completion = CompletionRequest::new(&self.model, &prompt)
            .with_system(ASTROLOGER_SYSTEM_PROMPT)
            .with_schema(&self.schema)
            .with_thinking_budget(self.thinking_budget);

        let raw = self.client.complete(&completion).await?;
        debug!("Compatibility raw response: {raw}");

        let result: CompatibilityResult =
            extract_validated(&raw, JsonShape::Object, CompatibilityResult::validate)?;
        info!(
            "Compatibility {} x {}: {} ({})",
            subject.name,
            candidate.name,
            result.percent(),
            result.connection_type
        );
        Ok(result)
    }
}
