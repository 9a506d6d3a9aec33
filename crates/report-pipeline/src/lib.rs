//! # report-pipeline
//!
//! Stage orchestration and CLI for the consultation report pipeline.
//!
//! Each stage reads its declared upstream artifacts, runs the corresponding
//! core crate, and writes its own artifact only after the whole stage has
//! succeeded. Stages are idempotent given their inputs and can be re-run
//! independently; a failed stage leaves upstream artifacts untouched and
//! valid on disk.

pub mod cli;
pub mod error;
pub mod stages;

pub use cli::{Cli, Commands};
pub use error::PipelineError;
pub use stages::{run_all, run_cluster, run_overview, run_summarize, run_translate};
