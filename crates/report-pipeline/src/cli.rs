//! CLI argument parsing for the report pipeline.

use clap::{Parser, Subcommand};

/// Consultation Report Pipeline
///
/// Turns a table of free-text consultation arguments into a clustered,
/// summarized, and optionally translated report.
#[derive(Parser, Debug)]
#[command(name = "report-pipeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the dataset's TOML config file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pipeline stages.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reduce embeddings to 2-D and assign topic clusters
    Cluster,

    /// Generate a label and takeaway per cluster
    Summarize,

    /// Synthesize the cross-cluster overview
    Overview,

    /// Translate all report texts into the configured languages
    Translate,

    /// Run every stage in order
    All,
}
