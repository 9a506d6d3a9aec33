//! LLM transport error type.

use thiserror::Error;

/// Errors raised by LLM invocations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed or returned a non-success status
    #[error("API request failed: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// Provider returned HTTP 429
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timed out
    #[error("Timeout waiting for response")]
    Timeout,

    /// Client misconfiguration (bad URL, missing key, ...)
    #[error("Invalid LLM configuration: {0}")]
    Config(String),
}
