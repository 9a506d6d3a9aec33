//! # report-clustering
//!
//! Clustering engine for the consultation report pipeline.
//!
//! Given one embedding vector per argument, produces one
//! [`ClusterPoint`] per argument: a 2-D layout position plus a hard cluster
//! assignment in `[0, n_topics)`. The algorithm is staged:
//!
//! 1. A seeded neighborhood-preserving nonlinear projection reduces each
//!    vector to 2-D (kNN attraction with sampled repulsion).
//! 2. A k-nearest-neighbor affinity graph is built over the reduced points,
//!    with `k = min(N-1, 10)`.
//! 3. The graph is partitioned into exactly `n_topics` clusters by spectral
//!    partitioning (normalized Laplacian eigenvectors + seeded k-means).
//!
//! All randomness flows from the explicit seed in [`ClusterParams`], so
//! identical input and seed reproduce identical output. The partitioning is
//! hard assignment: no soft-membership score is produced anywhere in this
//! crate, which is why downstream rows carry a fixed probability of 1.0.

pub mod error;
pub mod kmeans;
pub mod knn;
pub mod projection;
pub mod similarity;
pub mod spectral;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ClusteringError;
pub use projection::project_2d;
pub use similarity::cosine_similarity;
pub use spectral::spectral_partition;

/// Neighbor count cap for the spectral affinity graph.
const SPECTRAL_NEIGHBORS: usize = 10;

/// Parameters for a clustering run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Number of clusters to produce
    pub n_topics: usize,

    /// Seed driving the projection and the partitioning
    pub seed: u64,
}

/// Per-argument output of the clustering engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPoint {
    /// Reduced 2-D x coordinate
    pub x: f32,

    /// Reduced 2-D y coordinate
    pub y: f32,

    /// Assigned cluster in `[0, n_topics)`
    pub cluster_id: usize,
}

/// Reduce embeddings to 2-D and partition them into `n_topics` clusters.
///
/// Returns exactly one [`ClusterPoint`] per input vector, in input order.
/// Requesting more topics than the data can support is accepted and may
/// yield degenerate (singleton or empty) clusters.
///
/// # Errors
///
/// Fails with [`ClusteringError`] when fewer than two vectors are given,
/// when vector lengths are inconsistent, or when `n_topics` is outside
/// `[1, N]`.
pub fn cluster_embeddings(
    embeddings: &[Vec<f32>],
    params: &ClusterParams,
) -> Result<Vec<ClusterPoint>, ClusteringError> {
    validate_input(embeddings, params)?;

    let n = embeddings.len();
    debug!(n, n_topics = params.n_topics, seed = params.seed, "Clustering embeddings");

    let coords = project_2d(embeddings, params.seed);

    // Neighbor count stays valid for small N and never drops below 1.
    let n_neighbors = (n - 1).min(SPECTRAL_NEIGHBORS).max(1);
    let labels = spectral_partition(&coords, params.n_topics, n_neighbors, params.seed);

    Ok(coords
        .iter()
        .zip(labels)
        .map(|(&(x, y), cluster_id)| ClusterPoint { x, y, cluster_id })
        .collect())
}

fn validate_input(
    embeddings: &[Vec<f32>],
    params: &ClusterParams,
) -> Result<(), ClusteringError> {
    let n = embeddings.len();
    if n < 2 {
        return Err(ClusteringError::TooFewPoints(n));
    }
    if params.n_topics == 0 || params.n_topics > n {
        return Err(ClusteringError::InvalidTopicCount {
            n_topics: params.n_topics,
            n_points: n,
        });
    }

    let expected = embeddings[0].len();
    for (index, vector) in embeddings.iter().enumerate() {
        if vector.len() != expected {
            return Err(ClusteringError::InconsistentDimensions {
                expected,
                found: vector.len(),
                index,
            });
        }
    }
    Ok(())
}
