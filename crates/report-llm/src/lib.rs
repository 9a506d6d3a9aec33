//! # report-llm
//!
//! LLM transport for the consultation report pipeline.
//!
//! Provides the [`LlmClient`] trait used by the summarize, overview, and
//! translation stages, an OpenAI-compatible HTTP implementation with retry
//! logic, and a mock client for tests. Retries live here: the stages above
//! assume a single fallible call per invocation.

pub mod api;
pub mod client;
pub mod error;
pub mod mock;

pub use api::{ApiLlmClient, ApiLlmConfig};
pub use client::{LlmClient, LlmResponse};
pub use error::LlmError;
pub use mock::MockLlmClient;
