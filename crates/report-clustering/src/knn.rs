//! k-nearest-neighbor selection from a precomputed distance matrix.

/// Indices of the `k` nearest neighbors of each point, excluding the point
/// itself, ordered nearest-first. Ties break toward the lower index, so the
/// result is deterministic for identical input.
///
/// `k` is clamped to `n - 1`.
pub fn knn_indices(distances: &[Vec<f64>], k: usize) -> Vec<Vec<usize>> {
    let n = distances.len();
    let k = k.min(n.saturating_sub(1));

    (0..n)
        .map(|i| {
            let mut order: Vec<usize> = (0..n).filter(|&j| j != i).collect();
            order.sort_by(|&a, &b| {
                distances[i][a]
                    .partial_cmp(&distances[i][b])
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.cmp(&b))
            });
            order.truncate(k);
            order
        })
        .collect()
}

/// Mean distance from each point to its selected neighbors, across all
/// points. Used as the bandwidth of the Gaussian affinity kernel.
pub fn mean_neighbor_distance(distances: &[Vec<f64>], neighbors: &[Vec<usize>]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (i, nbrs) in neighbors.iter().enumerate() {
        for &j in nbrs {
            sum += distances[i][j];
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
