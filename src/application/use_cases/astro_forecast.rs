use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::prompts::{forecast_prompt, FORECAST_EVENT_COUNT};
use crate::application::response_parser::{extract_json, JsonShape};
use crate::application::schema::forecast_schema;
use crate::application::{AdapterSettings, ChatClient, CompletionRequest};
use crate::domain::{ChartSubject, DomainError, ForecastEntry};

/// Best-effort list of upcoming personalized events.
///
/// Never fails: any transport or parse problem yields an empty list, which
/// callers present as "no forecast available".
pub struct AstroForecastUseCase {
    client: Arc<dyn ChatClient>,
    model: String,
    schema: Value,
}

impl AstroForecastUseCase {
    pub fn new(client: Arc<dyn ChatClient>, settings: &AdapterSettings) -> Self {
        Self {
            client,
            model: settings.fast_model.clone(),
            schema: forecast_schema(),
        }
    }

    pub async fn execute(&self, subject: ChartSubject<'_>, as_of: NaiveDate) -> Vec<ForecastEntry> {
        match self.try_forecast(subject, as_of).await {
            Ok(mut entries) => {
                if entries.len() > FORECAST_EVENT_COUNT {
                    debug!(
                        "Forecast returned {} events; keeping the first {FORECAST_EVENT_COUNT}",
                        entries.len()
                    );
                    entries.truncate(FORECAST_EVENT_COUNT);
                }
                info!("Forecast for {} from {as_of}: {} events", subject.name, entries.len());
                entries
            }
            Err(e) => {
                warn!("Failed to fetch astro forecast for {}: {e}", subject.name);
                Vec::new()
            }
        }
    }

    async fn try_forecast(
        &self,
        subject: ChartSubject<'_>,
        as_of: NaiveDate,
    ) -> Result<Vec<ForecastEntry>, DomainError> {
        let prompt = forecast_prompt(subject, as_of)?;
        let completion = CompletionRequest::new(&self.model, &prompt).with_schema(&self.schema);
        let raw = self.client.complete(&completion).await?;
        debug!("Forecast raw response: {raw}");
        extract_json(&raw, JsonShape::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;
    use crate::domain::models::fixtures::sample_chart;
    use crate::domain::ForecastKind;

    fn entry_json(event: &str) -> String {
        format!(
            r#"{{"event":"{event}","date":"2026-11-01","vibe":"Reflective","influence":"Slow down.","type":"Transit"}}"#
        )
    }

    async fn run(client: MockChatClient) -> Vec<ForecastEntry> {
        let use_case = AstroForecastUseCase::new(Arc::new(client), &AdapterSettings::gemini());
        let chart = sample_chart();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        use_case.execute(ChartSubject::new("Ana", &chart), date).await
    }

    #[tokio::test]
    async fn parses_array_wrapped_in_prose() {
        let reply = format!("Upcoming: [{}, {}] Enjoy!", entry_json("A"), entry_json("B"));
        let entries = run(MockChatClient::replying(reply)).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].event, "B");
        assert_eq!(entries[0].kind, ForecastKind::Transit);
    }

    #[tokio::test]
    async fn keeps_at_most_four_events() {
        let items: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|e| entry_json(e)).collect();
        let reply = format!("[{}]", items.join(","));
        let entries = run(MockChatClient::replying(reply)).await;
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[3].event, "D");
    }

    #[tokio::test]
    async fn unparseable_reply_yields_empty_list() {
        let entries = run(MockChatClient::replying("The cosmos is quiet today.")).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_yields_empty_list() {
        let entries = run(MockChatClient::failing("timeout")).await;
        assert!(entries.is_empty());
    }
}
