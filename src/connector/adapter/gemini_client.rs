use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::DomainError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION_PATH: &str = "/v1beta/models";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

/// Thought-summary parts are flagged and skipped.
#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

/// HTTP client for the Gemini `generateContent` REST endpoint.
///
/// Structured requests are sent with `responseMimeType: application/json` and
/// the schema as `responseSchema`, so the provider constrains decoding
/// natively. A thinking budget maps to `generationConfig.thinkingConfig`.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    /// Base URL up to and including `/v1beta/models`.
    models_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_timeout(api_key, base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            models_url: format!("{}{}", base.trim_end_matches('/'), API_VERSION_PATH),
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable          | Default                                       |
    /// |-------------------|-----------------------------------------------|
    /// | `GEMINI_API_KEY`  | required; `None` when absent                  |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`   |
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("GEMINI_API_KEY").ok()?;
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        Some(Self::new(key, base))
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!("{}/{model}:generateContent", self.models_url)
    }

    fn build_request<'a>(request: &CompletionRequest<'a>) -> GenerateContentRequest<'a> {
        let generation_config = GenerationConfig {
            response_mime_type: request.response_schema.map(|_| "application/json"),
            response_schema: request.response_schema,
            thinking_config: request
                .thinking_budget
                .map(|thinking_budget| ThinkingConfig { thinking_budget }),
        };
        let has_config = generation_config.response_schema.is_some()
            || generation_config.thinking_config.is_some();

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            system_instruction: request.system.map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            generation_config: has_config.then_some(generation_config),
        }
    }

    fn response_text(response: GenerateContentResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, DomainError> {
        let url = self.endpoint_for(request.model);
        let body = Self::build_request(request);
        debug!(
            "GeminiClient: POST {url} (schema: {}, thinking: {:?})",
            request.expects_json(),
            request.thinking_budget
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            DomainError::transport(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        Ok(Self::response_text(api_response))
    }
}
