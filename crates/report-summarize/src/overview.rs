//! Cross-cluster overview synthesis.

use report_llm::LlmClient;
use report_types::{ClusterLabel, ClusterTakeaway, OverviewSettings, ProgressSink};

use crate::error::SummarizeError;
use crate::summarizer::bulleted;

/// Synthesize a narrative overview from all cluster labels and takeaways.
///
/// One LLM call; every label and takeaway enters the prompt verbatim as a
/// bulleted list, in table row order. No sampling, no batching.
pub async fn synthesize_overview(
    llm: &dyn LlmClient,
    question: &str,
    labels: &[ClusterLabel],
    takeaways: &[ClusterTakeaway],
    settings: &OverviewSettings,
    progress: &dyn ProgressSink,
) -> Result<String, SummarizeError> {
    progress.set_total(1);

    let label_texts: Vec<String> = labels.iter().map(|l| l.label.clone()).collect();
    let takeaway_texts: Vec<String> = takeaways.iter().map(|t| t.takeaways.clone()).collect();

    let input = format!(
        "Question of the consultation: {question}\n\n\
         Cluster labels:\n{}\n\n\
         Cluster takeaways:\n{}",
        bulleted(&label_texts),
        bulleted(&takeaway_texts),
    );

    let response = llm.complete(&settings.model, &settings.prompt, &input).await?;
    progress.advance(1);
    Ok(response.text().trim().to_string())
}
