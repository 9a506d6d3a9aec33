//! Pipeline stages.
//!
//! Each stage is a function of (config, artifact store, collaborators) that
//! reads upstream artifacts, runs the core, and writes its artifact on full
//! success. Ordering for a complete run: cluster -> summarize -> overview
//! -> translate.

mod cluster;
mod overview;
mod summarize;
mod translate;

pub use cluster::run_cluster;
pub use overview::run_overview;
pub use summarize::run_summarize;
pub use translate::run_translate;

use report_artifacts::ArtifactStore;
use report_llm::LlmClient;
use report_types::PipelineConfig;

use crate::error::PipelineError;

/// Run every stage in order against one dataset.
pub async fn run_all(
    config: &PipelineConfig,
    store: &ArtifactStore,
    llm: &dyn LlmClient,
) -> Result<(), PipelineError> {
    run_cluster(config, store)?;
    run_summarize(config, store, llm).await?;
    run_overview(config, store, llm).await?;
    run_translate(config, store, llm).await?;
    Ok(())
}
