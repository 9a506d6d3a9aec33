//! Spectral partitioning of the 2-D layout.
//!
//! Builds a k-nearest-neighbor affinity graph over the reduced points,
//! forms the normalized graph Laplacian, extracts its lowest eigenvectors
//! with a Jacobi eigensolver, and runs seeded k-means on the row-normalized
//! spectral embedding.

use crate::kmeans::kmeans;
use crate::knn::{knn_indices, mean_neighbor_distance};
use crate::similarity::pairwise_euclidean_distances;

/// Maximum Jacobi sweeps.
const MAX_SWEEPS: usize = 100;

/// Off-diagonal convergence threshold for the Jacobi iteration.
const CONVERGENCE_EPS: f64 = 1e-10;

/// Partition 2-D points into exactly `n_topics` groups.
///
/// Returns one label in `[0, n_topics)` per point, in input order. The
/// caller is responsible for clamping `n_neighbors` to `[1, N-1]`. A fixed
/// seed reproduces identical labels. Degenerate groupings (empty or
/// singleton clusters) are possible when the graph has fewer separated
/// components than `n_topics`.
pub fn spectral_partition(
    points: &[(f32, f32)],
    n_topics: usize,
    n_neighbors: usize,
    seed: u64,
) -> Vec<usize> {
    let n = points.len();
    if n_topics <= 1 || n == 0 {
        return vec![0; n];
    }

    let distances = pairwise_euclidean_distances(points);
    let neighbors = knn_indices(&distances, n_neighbors);
    let sigma = mean_neighbor_distance(&distances, &neighbors);

    // Symmetrized kNN affinity with a Gaussian kernel on edge length.
    let mut affinity = vec![vec![0.0f64; n]; n];
    for (i, nbrs) in neighbors.iter().enumerate() {
        for &j in nbrs {
            let weight = if sigma > 0.0 {
                let d = distances[i][j];
                (-d * d / (2.0 * sigma * sigma)).exp()
            } else {
                1.0
            };
            affinity[i][j] = affinity[i][j].max(weight);
            affinity[j][i] = affinity[j][i].max(weight);
        }
    }

    let laplacian = normalized_laplacian(&affinity);
    let (eigenvalues, eigenvectors) = jacobi_eigen(laplacian);

    // Indices of the n_topics smallest eigenvalues, ties toward lower index.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigenvalues[a]
            .partial_cmp(&eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    let selected = &order[..n_topics.min(n)];

    // Spectral embedding: one row per point, row-normalized.
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row: Vec<f64> = selected.iter().map(|&col| eigenvectors[i][col]).collect();
            let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in row.iter_mut() {
                    *value /= norm;
                }
            }
            row
        })
        .collect();

    kmeans(&rows, n_topics, seed)
}

/// Symmetric normalized Laplacian `I - D^{-1/2} W D^{-1/2}`.
///
/// Isolated vertices (zero degree) keep a bare identity row.
fn normalized_laplacian(affinity: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = affinity.len();
    let degree_inv_sqrt: Vec<f64> = affinity
        .iter()
        .map(|row| {
            let degree: f64 = row.iter().sum();
            if degree > 0.0 {
                1.0 / degree.sqrt()
            } else {
                0.0
            }
        })
        .collect();

    let mut laplacian = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let normalized = affinity[i][j] * degree_inv_sqrt[i] * degree_inv_sqrt[j];
            laplacian[i][j] = if i == j { 1.0 - normalized } else { -normalized };
        }
    }
    laplacian
}

/// Cyclic Jacobi eigendecomposition of a symmetric matrix.
///
/// Returns `(eigenvalues, eigenvectors)` where eigenvector `k` is the
/// column `eigenvectors[_][k]` matching `eigenvalues[k]`. Rotation order is
/// fixed, so the decomposition is deterministic for identical input.
fn jacobi_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v = vec![vec![0.0f64; n]; n];
    for (i, row) in v.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for _sweep in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .map(|(i, j)| a[i][j] * a[i][j])
            .sum();
        if off < CONVERGENCE_EPS {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p][q];
                if apq.abs() < CONVERGENCE_EPS / (n * n) as f64 {
                    continue;
                }

                let theta = 0.5 * (2.0 * apq).atan2(a[q][q] - a[p][p]);
                let c = theta.cos();
                let s = theta.sin();

                // A <- R^T A R, applied as column then row rotations.
                for i in 0..n {
                    let aip = a[i][p];
                    let aiq = a[i][q];
                    a[i][p] = c * aip - s * aiq;
                    a[i][q] = s * aip + c * aiq;
                }
                for i in 0..n {
                    let api = a[p][i];
                    let aqi = a[q][i];
                    a[p][i] = c * api - s * aqi;
                    a[q][i] = s * api + c * aqi;
                }

                // V <- V R accumulates the eigenvectors.
                for row in v.iter_mut() {
                    let vip = row[p];
                    let viq = row[q];
                    row[p] = c * vip - s * viq;
                    row[q] = s * vip + c * viq;
                }
            }
        }
    }

    let eigenvalues: Vec<f64> = (0..n).map(|i| a[i][i]).collect();
    (eigenvalues, v)
}
