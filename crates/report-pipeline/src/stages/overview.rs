//! Overview stage.

use report_artifacts::ArtifactStore;
use report_llm::LlmClient;
use report_summarize::synthesize_overview;
use report_types::{LogProgress, PipelineConfig};
use tracing::info;

use crate::error::PipelineError;

/// Synthesize the cross-cluster overview narrative.
///
/// Reads `labels.csv` and `takeaways.csv`, writes `overview.txt`.
pub async fn run_overview(
    config: &PipelineConfig,
    store: &ArtifactStore,
    llm: &dyn LlmClient,
) -> Result<(), PipelineError> {
    let labels = store.read_labels()?;
    let takeaways = store.read_takeaways()?;

    let progress = LogProgress::new("overview");
    let overview = synthesize_overview(
        llm,
        &config.question,
        &labels,
        &takeaways,
        &config.overview,
        &progress,
    )
    .await?;

    store.write_overview(&overview)?;
    info!(chars = overview.len(), "Overview stage complete");
    Ok(())
}
