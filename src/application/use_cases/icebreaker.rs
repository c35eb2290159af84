use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::prompts::icebreaker_prompt;
use crate::application::{AdapterSettings, ChatClient, CompletionRequest};
use crate::domain::{ChartSubject, DomainError};

/// Returned whenever the model has nothing usable to say.
pub const FALLBACK_ICEBREAKER: &str = "The stars are aligning for a conversation.";

/// Best-effort opener referencing a synastry connection.
///
/// Never fails: transport errors and empty replies yield
/// [`FALLBACK_ICEBREAKER`].
pub struct IcebreakerUseCase {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl IcebreakerUseCase {
    pub fn new(client: Arc<dyn ChatClient>, settings: &AdapterSettings) -> Self {
        Self {
            client,
            model: settings.fast_model.clone(),
        }
    }

    pub async fn execute(&self, subject: ChartSubject<'_>, candidate: ChartSubject<'_>) -> String {
        match self.try_generate(subject, candidate).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                debug!("Icebreaker reply was empty; using fallback");
                FALLBACK_ICEBREAKER.to_string()
            }
            Err(e) => {
                warn!(
                    "Icebreaker for {} x {} failed: {e}. Using fallback.",
                    subject.name, candidate.name
                );
                FALLBACK_ICEBREAKER.to_string()
            }
        }
    }

    async fn try_generate(
        &self,
        subject: ChartSubject<'_>,
        candidate: ChartSubject<'_>,
    ) -> Result<String, DomainError> {
        let prompt = icebreaker_prompt(subject, candidate)?;
        let completion = CompletionRequest::new(&self.model, &prompt);
        let raw = self.client.complete(&completion).await?;
        Ok(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;
    use crate::domain::models::fixtures::sample_chart;

    async fn run(client: MockChatClient) -> (String, Arc<MockChatClient>) {
        let client = Arc::new(client);
        let use_case = IcebreakerUseCase::new(client.clone(), &AdapterSettings::gemini());
        let chart = sample_chart();
        let text = use_case
            .execute(ChartSubject::new("Ana", &chart), ChartSubject::new("Bo", &chart))
            .await;
        (text, client)
    }

    #[tokio::test]
    async fn trims_reply_and_uses_fast_tier_without_schema() {
        let (text, client) = run(MockChatClient::replying("  Your Venus hums to my Mars.\n")).await;
        assert_eq!(text, "Your Venus hums to my Mars.");

        let sent = client.requests();
        assert_eq!(sent[0].model, "gemini-3-flash-preview");
        assert!(sent[0].response_schema.is_none());
        assert!(sent[0].thinking_budget.is_none());
    }

    #[tokio::test]
    async fn empty_reply_yields_fallback() {
        let (text, _) = run(MockChatClient::replying("   ")).await;
        assert_eq!(text, FALLBACK_ICEBREAKER);
    }

    #[tokio::test]
    async fn transport_failure_yields_fallback() {
        let (text, _) = run(MockChatClient::failing("connection refused")).await;
        assert_eq!(text, FALLBACK_ICEBREAKER);
    }
}
