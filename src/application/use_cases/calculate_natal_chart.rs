use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::application::prompts::{natal_chart_prompt, ASTROLOGER_SYSTEM_PROMPT};
use crate::application::response_parser::{extract_validated, JsonShape};
use crate::application::schema::natal_chart_schema;
use crate::application::{AdapterSettings, ChatClient, CompletionRequest};
use crate::domain::{ChartRequest, DomainError, NatalChart};

/// Computes a natal chart from birth data.
///
/// Strict: a reply that cannot be decoded, or that places a body outside
/// degree 0-29, minute 0-59 or house 1-12, fails the whole call.
pub struct CalculateNatalChartUseCase {
    client: Arc<dyn ChatClient>,
    model: String,
    thinking_budget: Option<u32>,
    schema: Value,
}

impl CalculateNatalChartUseCase {
    pub fn new(client: Arc<dyn ChatClient>, settings: &AdapterSettings) -> Self {
        Self {
            client,
            model: settings.reasoning_model.clone(),
            thinking_budget: settings.chart_thinking_budget,
            schema: natal_chart_schema(),
        }
    }

    pub async fn execute(&self, request: &ChartRequest) -> Result<NatalChart, DomainError> {
        if let Some(field) = request.missing_field() {
            return Err(DomainError::invalid_input(format!("{field} is required")));
        }

        info!("Calculating natal chart for {}", request.name);
        let prompt = natal_chart_prompt(request);
        let completion = CompletionRequest::new(&self.model, &prompt)
            .with_system(ASTROLOGER_SYSTEM_PROMPT)
            .with_schema(&self.schema)
            .with_thinking_budget(self.thinking_budget);

        let raw = self.client.complete(&completion).await?;
        debug!("Natal chart raw response: {raw}");

        let chart: NatalChart = extract_validated(&raw, JsonShape::Object, NatalChart::validate)?;
        info!(
            "Natal chart ready: Sun {} / Moon {} / Rising {} ({} bodies, {} aspects)",
            chart.sun_sign,
            chart.moon_sign,
            chart.rising_sign,
            chart.positions.len(),
            chart.aspects.len()
        );
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;
    use crate::domain::ZodiacSign;

    const CHART_JSON: &str = r#"{
        "sunSign": "Aries", "moonSign": "Cancer", "risingSign": "Libra",
        "summary": "s", "synthesis": "y",
        "natalChart": [
            {"planet": "Sun", "sign": "Aries", "degree": 1, "minute": 12, "isRetrograde": false, "house": 7}
        ],
        "aspects": []
    }"#;

    fn request() -> ChartRequest {
        ChartRequest::new("Luna", "1994-03-21", "04:12", "Lisbon")
    }

    #[tokio::test]
    async fn parses_chart_and_sends_schema_on_reasoning_tier() {
        let client = Arc::new(MockChatClient::replying(CHART_JSON));
        let use_case = CalculateNatalChartUseCase::new(client.clone(), &AdapterSettings::gemini());

        let chart = use_case.execute(&request()).await.unwrap();
        assert_eq!(chart.rising_sign, ZodiacSign::Libra);

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].model, "gemini-3-pro-preview");
        assert_eq!(sent[0].thinking_budget, Some(6000));
        assert!(sent[0].response_schema.is_some());
        assert!(sent[0].prompt.contains("Birth Location: Lisbon"));
    }

    #[tokio::test]
    async fn out_of_range_house_is_rejected() {
        let reply = CHART_JSON.replace("\"house\": 7", "\"house\": 13");
        let client = Arc::new(MockChatClient::replying(reply));
        let use_case = CalculateNatalChartUseCase::new(client, &AdapterSettings::gemini());

        let err = use_case.execute(&request()).await.unwrap_err();
        assert!(err.is_response_parse());
    }

    #[tokio::test]
    async fn blank_birth_data_never_reaches_the_model() {
        let client = Arc::new(MockChatClient::replying(CHART_JSON));
        let use_case = CalculateNatalChartUseCase::new(client.clone(), &AdapterSettings::gemini());

        let err = use_case
            .execute(&ChartRequest::new("Luna", "", "04:12", "Lisbon"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let client = Arc::new(MockChatClient::failing("rate limited"));
        let use_case = CalculateNatalChartUseCase::new(client, &AdapterSettings::gemini());

        let err = use_case.execute(&request()).await.unwrap_err();
        assert!(err.is_transport());
    }
}
