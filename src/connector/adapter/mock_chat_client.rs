use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::DomainError;

/// Owned copy of a [`CompletionRequest`] captured by [`MockChatClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub model: String,
    pub system: Option<String>,
    pub prompt: String,
    pub response_schema: Option<Value>,
    pub thinking_budget: Option<u32>,
}

impl From<&CompletionRequest<'_>> for RecordedRequest {
    fn from(request: &CompletionRequest<'_>) -> Self {
        Self {
            model: request.model.to_string(),
            system: request.system.map(str::to_string),
            prompt: request.prompt.to_string(),
            response_schema: request.response_schema.cloned(),
            thinking_budget: request.thinking_budget,
        }
    }
}

enum Replies {
    /// Replies handed out in order; once exhausted the last one repeats.
    Scripted(VecDeque<Result<String, String>>),
    /// A fixture picked from the shape of the requested schema.
    Canned,
}

/// An offline [`ChatClient`] for tests and `--provider mock`.
pub struct MockChatClient {
    replies: Mutex<Replies>,
    requests: Mutex<Vec<RecordedRequest>>,
}

const CANNED_CHART: &str = r#"```json
{
  "sunSign": "Pisces",
  "moonSign": "Scorpio",
  "risingSign": "Leo",
  "summary": "A dreamer with deep waters and a radiant mask.",
  "synthesis": "Intuition leads and intensity follows; the Leo ascendant turns private depth into warmth others can see.",
  "natalChart": [
    {"planet": "Sun", "sign": "Pisces", "degree": 14, "minute": 22, "isRetrograde": false, "house": 8, "dignity": "Neutral", "element": "Water"},
    {"planet": "Moon", "sign": "Scorpio", "degree": 3, "minute": 51, "isRetrograde": false, "house": 4, "dignity": "Fall", "element": "Water"},
    {"planet": "Venus", "sign": "Aries", "degree": 27, "minute": 5, "isRetrograde": false, "house": 9, "dignity": "Detriment", "element": "Fire"},
    {"planet": "Mars", "sign": "Capricorn", "degree": 9, "minute": 40, "isRetrograde": false, "house": 6, "dignity": "Exaltation", "element": "Earth"},
    {"planet": "Mercury", "sign": "Aquarius", "degree": 29, "minute": 59, "isRetrograde": true, "house": 7, "dignity": "Neutral", "element": "Air"}
  ],
  "aspects": [
    {"planet1": "Sun", "planet2": "Moon", "type": "Trine", "orb": 4.5, "description": "Feeling and will move together."},
    {"planet1": "Venus", "planet2": "Mars", "type": "Square", "orb": 1.4, "description": "Desire pushes against discipline."}
  ]
}
```"#;

const CANNED_COMPATIBILITY: &str = r#"{
  "score": 78,
  "summary": "Water meets water: an intuitive bond that needs air to breathe.",
  "pros": ["Instant emotional recognition", "Shared imagination"],
  "cons": ["Moods can echo and amplify"],
  "connectionType": "Soulmate",
  "sunMoonAspect": {"title": "Sun trine Moon", "description": "Each feels seen without explanation.", "vibe": "Nurturing"},
  "venusMarsAspect": {"title": "Venus square Mars", "description": "Attraction with friction.", "vibe": "Electric"}
}"#;

const CANNED_FORECAST: &str = r#"[
  {"event": "Full Moon in Taurus", "date": "2026-11-05", "vibe": "Grounding", "influence": "Lights up your fourth house of roots.", "type": "Moon"},
  {"event": "Mercury Retrograde in Sagittarius", "date": "2026-11-24", "vibe": "Reflective", "influence": "Revisit promises made in haste.", "type": "Retrograde"},
  {"event": "Venus enters Capricorn", "date": "2026-12-01", "vibe": "Steady", "influence": "Affection takes a committed tone.", "type": "Transit"},
  {"event": "New Moon in Sagittarius", "date": "2026-12-09", "vibe": "Expansive", "influence": "Seed a journey your Sun has been dreaming of.", "type": "Moon"}
]"#;

const CANNED_ICEBREAKER: &str =
    "  Your Moon seems to know where my Venus hides; shall we find out why?\n";

impl MockChatClient {
    /// Canned mode: answers every request with a plausible fixture.
    pub fn new() -> Self {
        Self::from_replies(Replies::Canned)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_replies(vec![Ok(text.into())])
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_replies(vec![Err(message.into())])
    }

    /// `Err` entries surface as [`DomainError::Transport`].
    pub fn with_replies(replies: Vec<Result<String, String>>) -> Self {
        Self::from_replies(Replies::Scripted(replies.into()))
    }

    fn from_replies(replies: Replies) -> Self {
        Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn canned_reply(request: &CompletionRequest<'_>) -> &'static str {
        match request.response_schema {
            None => CANNED_ICEBREAKER,
            Some(schema) if schema["type"] == "ARRAY" => CANNED_FORECAST,
            Some(schema) if schema["properties"].get("score").is_some() => CANNED_COMPATIBILITY,
            Some(_) => CANNED_CHART,
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, DomainError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(RecordedRequest::from(request));
        }

        let mut replies = self
            .replies
            .lock()
            .map_err(|_| DomainError::transport("MockChatClient: reply queue poisoned"))?;

        let reply = match &mut *replies {
            Replies::Canned => Ok(Self::canned_reply(request).to_string()),
            Replies::Scripted(queue) => {
                let next = if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                };
                next.unwrap_or_else(|| Err("no scripted reply".to_string()))
            }
        };

        debug!(
            "MockChatClient answered {} request for model {}",
            if request.expects_json() { "structured" } else { "free-text" },
            request.model
        );
        reply.map_err(|e| DomainError::transport(format!("MockChatClient: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::schema::{compatibility_schema, forecast_schema, natal_chart_schema};

    #[tokio::test]
    async fn scripted_replies_are_consumed_in_order_then_repeat() {
        let client = MockChatClient::with_replies(vec![
            Ok("first".to_string()),
            Err("down".to_string()),
        ]);
        let request = CompletionRequest::new("m", "p");

        assert_eq!(client.complete(&request).await.unwrap(), "first");
        assert!(client.complete(&request).await.unwrap_err().is_transport());
        assert!(client.complete(&request).await.unwrap_err().is_transport());
        assert_eq!(client.requests().len(), 3);
    }

    #[tokio::test]
    async fn canned_mode_picks_fixture_by_schema_shape() {
        let client = MockChatClient::new();
        let chart = natal_chart_schema();
        let compat = compatibility_schema();
        let forecast = forecast_schema();

        let reply = client
            .complete(&CompletionRequest::new("m", "p").with_schema(&chart))
            .await
            .unwrap();
        assert!(reply.starts_with("```json"));

        let reply = client
            .complete(&CompletionRequest::new("m", "p").with_schema(&compat))
            .await
            .unwrap();
        assert!(reply.contains("\"score\": 78"));

        let reply = client
            .complete(&CompletionRequest::new("m", "p").with_schema(&forecast))
            .await
            .unwrap();
        assert!(reply.trim_start().starts_with('['));

        let reply = client.complete(&CompletionRequest::new("m", "p")).await.unwrap();
        assert!(reply.contains("Moon"));
    }
}
