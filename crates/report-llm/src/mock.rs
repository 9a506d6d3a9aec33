//! Mock LLM client for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::{LlmClient, LlmResponse};
use crate::error::LlmError;

type ResponseFn = Box<dyn Fn(&str, &str, &str) -> Result<String, LlmError> + Send + Sync>;

/// Mock LLM client that counts calls and produces scripted responses.
///
/// Exported for use by the stage crates' tests.
pub struct MockLlmClient {
    respond: ResponseFn,
    calls: AtomicUsize,
}

impl MockLlmClient {
    /// Client that always returns the same response text.
    pub fn fixed(response: impl Into<String>) -> Self {
        let response = response.into();
        Self::from_fn(move |_, _, _| Ok(response.clone()))
    }

    /// Client that always fails with an API error.
    pub fn failing(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::from_fn(move |_, _, _| Err(LlmError::Api(detail.clone())))
    }

    /// Client with a custom response function of (model, system, user).
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str, &str, &str) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(f),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(model, system, user).map(LlmResponse::new)
    }
}
