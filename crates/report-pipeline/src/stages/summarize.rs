//! Cluster summarization stage.

use report_artifacts::ArtifactStore;
use report_llm::LlmClient;
use report_summarize::summarize_clusters;
use report_types::{LogProgress, PipelineConfig};
use tracing::info;

use crate::error::PipelineError;

/// Generate a label and a takeaway for every cluster.
///
/// Reads `args.csv` and `clusters.csv`, writes `labels.csv` and
/// `takeaways.csv` together once every cluster has been summarized. A
/// failing LLM call on any cluster aborts the stage with neither table
/// written.
pub async fn run_summarize(
    config: &PipelineConfig,
    store: &ArtifactStore,
    llm: &dyn LlmClient,
) -> Result<(), PipelineError> {
    let arguments = store.read_arguments()?;
    let assignments = store.read_assignments()?;

    let progress = LogProgress::new("summarize");
    let summaries = summarize_clusters(
        llm,
        &config.question,
        &arguments,
        &assignments,
        &config.labelling,
        &config.takeaways,
        &progress,
    )
    .await?;

    let mut labels = Vec::with_capacity(summaries.len());
    let mut takeaways = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let (label, takeaway) = summary.into_rows();
        labels.push(label);
        takeaways.push(takeaway);
    }

    store.write_summaries(&labels, &takeaways)?;
    info!(clusters = labels.len(), "Summarize stage complete");
    Ok(())
}
