//! Vector similarity functions.
//!
//! Pure Rust implementations without external dependencies.

/// Calculate cosine similarity between two vectors.
///
/// Returns value in [-1.0, 1.0] where 1.0 = identical direction.
/// Zero vectors compare as 0.0.
///
/// # Panics
/// Panics if vectors have different dimensions.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same dimension");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Calculate pairwise cosine distances between embeddings.
///
/// Returns a symmetric distance matrix where distance = 1 - cosine_similarity.
pub fn pairwise_cosine_distances(embeddings: &[Vec<f32>]) -> Vec<Vec<f64>> {
    let n = embeddings.len();
    let mut distances = vec![vec![0.0f64; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = cosine_similarity(&embeddings[i], &embeddings[j]);
            let dist = (1.0 - sim) as f64;
            distances[i][j] = dist;
            distances[j][i] = dist;
        }
    }

    distances
}

/// Calculate pairwise euclidean distances between 2-D points.
pub fn pairwise_euclidean_distances(points: &[(f32, f32)]) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut distances = vec![vec![0.0f64; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = (points[i].0 - points[j].0) as f64;
            let dy = (points[i].1 - points[j].1) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            distances[i][j] = dist;
            distances[j][i] = dist;
        }
    }

    distances
}
