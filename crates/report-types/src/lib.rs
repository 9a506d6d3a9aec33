//! # report-types
//!
//! Core record types, configuration, and progress reporting for the
//! consultation report pipeline.
//!
//! The pipeline turns a table of free-text arguments into a structured
//! report: arguments are clustered by embedding similarity, each cluster is
//! labeled and summarized by an LLM, a cross-cluster overview is synthesized,
//! and all textual artifacts can be translated into additional languages.
//!
//! This crate holds the data that flows between stages; the stages
//! themselves live in their own crates.

pub mod config;
pub mod error;
pub mod progress;
pub mod records;

pub use config::{
    ClusteringSettings, LabellingSettings, OverviewSettings, PipelineConfig, TakeawaysSettings,
    TranslationSettings,
};
pub use error::ConfigError;
pub use progress::{CountingProgress, LogProgress, NoProgress, ProgressSink};
pub use records::{
    Argument, ClusterAssignment, ClusterLabel, ClusterSummary, ClusterTakeaway, EmbeddingRecord,
};
