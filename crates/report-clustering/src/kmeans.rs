//! Seeded k-means over spectral embedding rows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum Lloyd iterations.
const MAX_ITERATIONS: usize = 100;

/// Cluster `rows` into `k` groups, returning one label in `[0, k)` per row.
///
/// Initialization is seeded: the first centroid is a random row, the rest
/// are chosen farthest-first, so a fixed seed reproduces the same labels.
/// Clusters may end up empty when the data cannot support `k` separated
/// groups; their centroid is simply never matched.
pub fn kmeans(rows: &[Vec<f64>], k: usize, seed: u64) -> Vec<usize> {
    let n = rows.len();
    if k <= 1 || n == 0 {
        return vec![0; n];
    }
    let k = k.min(n);

    let mut centroids = initialize_farthest_first(rows, k, seed);
    let mut assignments: Vec<usize> = vec![0; n];

    for _iteration in 0..MAX_ITERATIONS {
        // Assignment step: nearest centroid, ties toward the lower index.
        let mut changed = false;
        for (i, row) in rows.iter().enumerate() {
            let nearest = nearest_centroid(row, &centroids);
            if nearest != assignments[i] {
                changed = true;
                assignments[i] = nearest;
            }
        }

        if !changed {
            break;
        }

        // Update step: recompute centroids; empty clusters keep theirs.
        for (cluster_id, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Vec<f64>> = assignments
                .iter()
                .enumerate()
                .filter(|(_, &a)| a == cluster_id)
                .map(|(i, _)| &rows[i])
                .collect();

            if !members.is_empty() {
                *centroid = mean_row(&members);
            }
        }
    }

    assignments
}

fn initialize_farthest_first(rows: &[Vec<f64>], k: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(rows[rng.random_range(0..rows.len())].clone());

    while centroids.len() < k {
        let mut best_idx = 0;
        let mut max_min_dist = -1.0f64;

        for (i, row) in rows.iter().enumerate() {
            let min_dist = centroids
                .iter()
                .map(|c| squared_distance(row, c))
                .fold(f64::MAX, f64::min);

            if min_dist > max_min_dist {
                max_min_dist = min_dist;
                best_idx = i;
            }
        }

        centroids.push(rows[best_idx].clone());
    }

    centroids
}

fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::MAX;

    for (i, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(row, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn mean_row(members: &[&Vec<f64>]) -> Vec<f64> {
    let dim = members[0].len();
    let mut mean = vec![0.0; dim];
    for member in members {
        for (slot, &value) in member.iter().enumerate() {
            mean[slot] += value;
        }
    }
    for value in mean.iter_mut() {
        *value /= members.len() as f64;
    }
    mean
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, -0.1],
            vec![-0.1, 0.1],
            vec![5.0, 5.0],
            vec![5.1, 4.9],
            vec![4.9, 5.1],
        ]
    }

    #[test]
    fn test_kmeans_separates_blobs() {
        let rows = two_blobs();
        let labels = kmeans(&rows, 2, 42);
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[0], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[3], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_kmeans_deterministic() {
        let rows = two_blobs();
        assert_eq!(kmeans(&rows, 2, 7), kmeans(&rows, 2, 7));
    }

    #[test]
    fn test_kmeans_single_cluster() {
        let rows = two_blobs();
        let labels = kmeans(&rows, 1, 42);
        assert!(labels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_kmeans_k_equal_n() {
        let rows = two_blobs();
        let labels = kmeans(&rows, 6, 42);
        assert!(labels.iter().all(|&l| l < 6));
        // Farthest-first over six distinct points gives six distinct labels.
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }

    #[test]
    fn test_kmeans_labels_in_range() {
        let rows = two_blobs();
        let labels = kmeans(&rows, 4, 42);
        assert!(labels.iter().all(|&l| l < 4));
    }
}
