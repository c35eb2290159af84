use async_trait::async_trait;
use serde_json::Value;

use crate::domain::DomainError;

/// One outbound completion call.
///
/// Borrowed throughout: a request lives only for the duration of a single
/// `complete` call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system: Option<&'a str>,
    pub prompt: &'a str,
    /// Declarative output shape (object/array/enum/required constraints).
    /// `None` requests free text.
    pub response_schema: Option<&'a Value>,
    pub thinking_budget: Option<u32>,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            system: None,
            prompt,
            response_schema: None,
            thinking_budget: None,
        }
    }

    pub fn with_system(mut self, system: &'a str) -> Self {
        self.system = Some(system);
        self
    }

    pub fn with_schema(mut self, schema: &'a Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.thinking_budget = budget;
        self
    }

    pub fn expects_json(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// An interface for sending prompts to a generative language model and
/// receiving its text reply.
///
/// Implementors encapsulate transport, authentication and vendor-specific
/// envelopes. Any failure to obtain a reply surfaces as
/// [`DomainError::Transport`]; interpreting the text is the caller's job.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, DomainError>;
}
