//! # report-summarize
//!
//! LLM-backed cluster summarization for the consultation report pipeline.
//!
//! For every cluster produced by the clustering engine this crate draws
//! contrastive argument samples (inside vs. outside the cluster), asks an
//! LLM for a short label and a longer takeaway, and combines the results
//! into one summary row per cluster. A separate single LLM call synthesizes
//! the cross-cluster overview.
//!
//! A failed LLM call aborts the whole stage with the offending cluster id:
//! a partial summary table is not a valid pipeline artifact.

pub mod error;
pub mod overview;
pub mod sampler;
pub mod summarizer;

pub use error::SummarizeError;
pub use overview::synthesize_overview;
pub use sampler::{contrastive_sample, ContrastiveSample};
pub use summarizer::{distinct_cluster_ids, generate_label, generate_takeaway, summarize_clusters};
