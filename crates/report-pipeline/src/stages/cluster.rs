//! Clustering stage.

use report_artifacts::ArtifactStore;
use report_clustering::{cluster_embeddings, ClusterParams};
use report_types::{ClusterAssignment, PipelineConfig};
use tracing::info;

use crate::error::PipelineError;

/// Reduce the dataset's embeddings to 2-D and assign topic clusters.
///
/// Reads `args.csv` and `embeddings.json`, writes `clusters.csv` with one
/// row per argument in argument order. The probability column is a fixed
/// 1.0 placeholder: the partitioning is hard assignment.
pub fn run_cluster(config: &PipelineConfig, store: &ArtifactStore) -> Result<(), PipelineError> {
    let arguments = store.read_arguments()?;
    let embeddings = store.read_embeddings()?;

    let by_arg_id: std::collections::HashMap<&str, &Vec<f32>> = embeddings
        .iter()
        .map(|record| (record.arg_id.as_str(), &record.embedding))
        .collect();

    let mut vectors: Vec<Vec<f32>> = Vec::with_capacity(arguments.len());
    for argument in &arguments {
        let vector = by_arg_id.get(argument.arg_id.as_str()).ok_or_else(|| {
            PipelineError::Input(format!("no embedding for argument {}", argument.arg_id))
        })?;
        vectors.push((*vector).clone());
    }

    let params = ClusterParams {
        n_topics: config.clustering.clusters,
        seed: config.clustering.seed,
    };
    let points = cluster_embeddings(&vectors, &params)?;

    let rows: Vec<ClusterAssignment> = arguments
        .iter()
        .zip(&points)
        .map(|(argument, point)| ClusterAssignment {
            arg_id: argument.arg_id.clone(),
            x: point.x,
            y: point.y,
            probability: 1.0,
            cluster_id: point.cluster_id,
        })
        .collect();

    store.write_assignments(&rows)?;
    info!(rows = rows.len(), clusters = params.n_topics, "Clustering stage complete");
    Ok(())
}
