//! Artifact I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing pipeline artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// A declared upstream artifact does not exist yet
    #[error("Artifact missing: {path} (run the `{produced_by}` stage first)")]
    Missing {
        path: PathBuf,
        produced_by: &'static str,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
