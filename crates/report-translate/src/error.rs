//! Translation error types.

use report_llm::LlmError;
use thiserror::Error;

/// Errors raised during translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A single-text single-language LLM call failed.
    ///
    /// Aborts the whole translation stage; partial results are not written.
    #[error("Translation to {language} failed: {source}")]
    Call {
        language: String,
        #[source]
        source: LlmError,
    },
}
