//! Seeded 2-D neighbor embedding.
//!
//! Reduces high-dimensional embedding vectors to a 2-D layout that keeps
//! near neighbors near: each point is attracted along its k-nearest-neighbor
//! edges (weighted by a Gaussian kernel on the original cosine distance) and
//! repelled from randomly sampled points. The walk is driven entirely by a
//! seeded RNG, so identical input and seed reproduce identical coordinates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::knn::{knn_indices, mean_neighbor_distance};
use crate::similarity::pairwise_cosine_distances;

/// Neighbor count cap for the attraction graph.
const PROJECTION_NEIGHBORS: usize = 15;

/// Optimization epochs.
const EPOCHS: usize = 200;

/// Randomly sampled repulsion partners per point per epoch.
const NEGATIVE_SAMPLES: usize = 5;

/// Initial learning rate, decayed linearly to zero over the epochs.
const INITIAL_LEARNING_RATE: f64 = 0.15;

/// Half-width of the uniform initialization square.
const INIT_RANGE: f64 = 10.0;

/// Project embeddings onto 2-D coordinates.
///
/// The caller guarantees at least two vectors of consistent dimension.
pub fn project_2d(embeddings: &[Vec<f32>], seed: u64) -> Vec<(f32, f32)> {
    let n = embeddings.len();
    let k = (n - 1).min(PROJECTION_NEIGHBORS);

    let distances = pairwise_cosine_distances(embeddings);
    let neighbors = knn_indices(&distances, k);
    let sigma = mean_neighbor_distance(&distances, &neighbors);

    // Edge weights: strong pull between points that were close in the
    // original space, weak pull across the neighborhood fringe.
    let weights: Vec<Vec<f64>> = neighbors
        .iter()
        .enumerate()
        .map(|(i, nbrs)| {
            nbrs.iter()
                .map(|&j| {
                    if sigma > 0.0 {
                        let d = distances[i][j];
                        (-d * d / (2.0 * sigma * sigma)).exp()
                    } else {
                        1.0
                    }
                })
                .collect()
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<[f64; 2]> = (0..n)
        .map(|_| {
            [
                rng.random_range(-INIT_RANGE..INIT_RANGE),
                rng.random_range(-INIT_RANGE..INIT_RANGE),
            ]
        })
        .collect();

    for epoch in 0..EPOCHS {
        let lr = INITIAL_LEARNING_RATE * (1.0 - epoch as f64 / EPOCHS as f64);

        for i in 0..n {
            // Attraction along kNN edges.
            for (slot, &j) in neighbors[i].iter().enumerate() {
                let w = weights[i][slot];
                let dx = positions[j][0] - positions[i][0];
                let dy = positions[j][1] - positions[i][1];
                positions[i][0] += lr * w * dx;
                positions[i][1] += lr * w * dy;
            }

            // Repulsion from sampled points, bounded by a 1/(1+d^2) kernel.
            for _ in 0..NEGATIVE_SAMPLES {
                let m = rng.random_range(0..n);
                if m == i {
                    continue;
                }
                let dx = positions[i][0] - positions[m][0];
                let dy = positions[i][1] - positions[m][1];
                let dsq = dx * dx + dy * dy;
                let push = lr / (1.0 + dsq);
                positions[i][0] += push * dx;
                positions[i][1] += push * dy;
            }
        }
    }

    // Center the layout on the origin.
    let (mut cx, mut cy) = (0.0, 0.0);
    for p in &positions {
        cx += p[0];
        cy += p[1];
    }
    cx /= n as f64;
    cy /= n as f64;

    positions
        .iter()
        .map(|p| ((p[0] - cx) as f32, (p[1] - cy) as f32))
        .collect()
}
