//! Per-cluster label and takeaway generation.

use report_llm::LlmClient;
use report_types::{
    Argument, ClusterAssignment, ClusterSummary, LabellingSettings, ProgressSink,
    TakeawaysSettings,
};
use tracing::info;

use crate::error::SummarizeError;
use crate::sampler::{contrastive_sample, ContrastiveSample};

/// Distinct cluster ids in order of first appearance.
pub fn distinct_cluster_ids(assignments: &[ClusterAssignment]) -> Vec<usize> {
    let mut seen = Vec::new();
    for assignment in assignments {
        if !seen.contains(&assignment.cluster_id) {
            seen.push(assignment.cluster_id);
        }
    }
    seen
}

/// Summarize every cluster present in the assignment table.
///
/// For each distinct cluster id (first-appearance order) a label sample and
/// a takeaway sample are drawn with the respective stage's `sample_size`,
/// and one LLM call each produces the label and the takeaway. Progress is
/// one unit per completed cluster against a total declared up front.
///
/// The first failing LLM call aborts the stage; the error names the
/// offending cluster so the stage can be re-run after the cause is fixed.
pub async fn summarize_clusters(
    llm: &dyn LlmClient,
    question: &str,
    arguments: &[Argument],
    assignments: &[ClusterAssignment],
    labelling: &LabellingSettings,
    takeaways: &TakeawaysSettings,
    progress: &dyn ProgressSink,
) -> Result<Vec<ClusterSummary>, SummarizeError> {
    let cluster_ids = distinct_cluster_ids(assignments);
    progress.set_total(cluster_ids.len() as u64);

    let mut summaries = Vec::with_capacity(cluster_ids.len());
    for cluster_id in cluster_ids {
        let label_sample =
            contrastive_sample(arguments, assignments, cluster_id, labelling.sample_size);
        let label = generate_label(
            llm,
            question,
            &label_sample,
            &labelling.prompt,
            &labelling.model,
        )
        .await
        .map_err(|source| SummarizeError::ClusterCall { cluster_id, source })?;

        let takeaway_sample =
            contrastive_sample(arguments, assignments, cluster_id, takeaways.sample_size);
        let takeaway = generate_takeaway(
            llm,
            question,
            &takeaway_sample,
            &takeaways.prompt,
            &takeaways.model,
        )
        .await
        .map_err(|source| SummarizeError::ClusterCall { cluster_id, source })?;

        info!(cluster_id, label = %label, "Cluster summarized");
        summaries.push(ClusterSummary {
            cluster_id,
            label,
            takeaway,
        });
        progress.advance(1);
    }

    Ok(summaries)
}

/// Generate a short label for one cluster.
///
/// The prompt contrasts arguments inside the cluster with arguments outside
/// it, so the label captures what makes the cluster distinctive.
pub async fn generate_label(
    llm: &dyn LlmClient,
    question: &str,
    sample: &ContrastiveSample,
    prompt: &str,
    model: &str,
) -> Result<String, report_llm::LlmError> {
    let input = format!(
        "Question of the consultation: {question}\n\n\
         Examples of arguments OUTSIDE the cluster:\n{}\n\n\
         Examples of arguments INSIDE the cluster:\n{}",
        bulleted(&sample.outside),
        bulleted(&sample.inside),
    );
    let response = llm.complete(model, prompt, &input).await?;
    Ok(response.text().trim().to_string())
}

/// Generate a longer-form takeaway for one cluster.
///
/// Only the in-cluster sample enters the prompt; the takeaway describes the
/// cluster's content rather than its boundary.
pub async fn generate_takeaway(
    llm: &dyn LlmClient,
    question: &str,
    sample: &ContrastiveSample,
    prompt: &str,
    model: &str,
) -> Result<String, report_llm::LlmError> {
    let input = format!(
        "Question of the consultation: {question}\n\n\
         Examples of arguments:\n{}",
        bulleted(&sample.inside),
    );
    let response = llm.complete(model, prompt, &input).await?;
    Ok(response.text().trim().to_string())
}

/// Join items as a ` * `-bulleted list.
pub(crate) fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(" * {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
