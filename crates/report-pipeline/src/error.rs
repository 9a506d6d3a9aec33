//! Pipeline-level error type.

use thiserror::Error;

/// Unified error for stage orchestration.
///
/// Wraps the per-crate errors so the binary can report which stage failed
/// and why, with enough context to re-run that stage alone.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration loading or validation failed
    #[error(transparent)]
    Config(#[from] report_types::ConfigError),

    /// An artifact could not be read or written
    #[error(transparent)]
    Artifact(#[from] report_artifacts::ArtifactError),

    /// The clustering engine rejected its input
    #[error(transparent)]
    Clustering(#[from] report_clustering::ClusteringError),

    /// Cluster summarization or overview synthesis failed
    #[error(transparent)]
    Summarize(#[from] report_summarize::SummarizeError),

    /// Translation failed
    #[error(transparent)]
    Translate(#[from] report_translate::TranslateError),

    /// The LLM transport could not be constructed
    #[error(transparent)]
    Llm(#[from] report_llm::LlmError),

    /// Inputs disagree with each other
    #[error("Invalid input: {0}")]
    Input(String),
}
