//! LLM client trait and response type.

use async_trait::async_trait;

use crate::error::LlmError;

/// Response from an LLM invocation.
///
/// A single tagged text payload; callers never branch on provider-specific
/// response shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    text: String,
}

impl LlmResponse {
    /// Wrap raw response text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The response text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Trait for a chat-style LLM completion call.
///
/// Implementations handle transport concerns (HTTP, rate limiting, retries).
/// One call produces one response; callers issue exactly one call per unit of
/// work and propagate failures.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for a system prompt plus user input.
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<LlmResponse, LlmError>;
}
