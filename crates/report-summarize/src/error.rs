//! Summarization error types.

use report_llm::LlmError;
use thiserror::Error;

/// Errors raised while summarizing clusters or synthesizing the overview.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// An LLM call failed while summarizing one cluster.
    ///
    /// Carries the cluster id so the operator knows where the stage stopped;
    /// the stage writes nothing when this is raised.
    #[error("LLM call failed for cluster {cluster_id}: {source}")]
    ClusterCall {
        cluster_id: usize,
        #[source]
        source: LlmError,
    },

    /// The overview LLM call failed.
    #[error("Overview synthesis failed: {0}")]
    Overview(#[from] LlmError),
}
