//! Record types exchanged between pipeline stages.
//!
//! Field names on the wire (`arg-id`, `comment-id`, `cluster-id`, ...) are
//! the compatibility contract between stages and with downstream report
//! renderers; they must not change.

use serde::{Deserialize, Serialize};

/// A single free-text response unit under analysis.
///
/// Source of truth for the pipeline; never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Opaque argument identifier
    #[serde(rename = "arg-id")]
    pub arg_id: String,

    /// Identifier of the comment this argument was extracted from
    #[serde(rename = "comment-id")]
    pub comment_id: String,

    /// The argument text itself
    #[serde(rename = "argument")]
    pub text: String,
}

/// One embedding vector per argument, produced by an external embedding
/// collaborator and consumed read-only by the clustering stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    /// Argument identifier (one-to-one with [`Argument`])
    #[serde(rename = "arg-id")]
    pub arg_id: String,

    /// Fixed-length embedding vector
    pub embedding: Vec<f32>,
}

/// Cluster membership and 2-D layout position for one argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    /// Argument identifier
    #[serde(rename = "arg-id")]
    pub arg_id: String,

    /// Reduced 2-D x coordinate
    pub x: f32,

    /// Reduced 2-D y coordinate
    pub y: f32,

    /// Membership confidence in [0, 1].
    ///
    /// Spectral partitioning is a hard-assignment algorithm and produces no
    /// soft-membership score, so this is a fixed placeholder of 1.0 kept for
    /// wire compatibility.
    pub probability: f32,

    /// Assigned cluster, in `[0, n_topics)`
    #[serde(rename = "cluster-id")]
    pub cluster_id: usize,
}

/// Short LLM-generated label for one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLabel {
    /// Cluster identifier
    #[serde(rename = "cluster-id")]
    pub cluster_id: usize,

    /// Short human-readable label
    pub label: String,
}

/// Longer-form LLM-generated takeaway for one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterTakeaway {
    /// Cluster identifier
    #[serde(rename = "cluster-id")]
    pub cluster_id: usize,

    /// Longer-form summary of the cluster's content
    pub takeaways: String,
}

/// Combined per-cluster summary as produced by the summarize stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    /// Cluster identifier
    pub cluster_id: usize,

    /// Short human-readable label
    pub label: String,

    /// Longer-form takeaway
    pub takeaway: String,
}

impl ClusterSummary {
    /// Split into the two wire records (`labels.csv` / `takeaways.csv` rows).
    pub fn into_rows(self) -> (ClusterLabel, ClusterTakeaway) {
        (
            ClusterLabel {
                cluster_id: self.cluster_id,
                label: self.label,
            },
            ClusterTakeaway {
                cluster_id: self.cluster_id,
                takeaways: self.takeaway,
            },
        )
    }
}
