//! Clustering error types.

use thiserror::Error;

/// Errors raised by the clustering engine.
///
/// All variants describe malformed or insufficiently sized input; the
/// engine itself has no external dependencies that can fail.
#[derive(Debug, Error)]
pub enum ClusteringError {
    /// Fewer than two points were given; a partition is undefined below two
    #[error("Cannot cluster {0} point(s); at least 2 are required")]
    TooFewPoints(usize),

    /// Vector lengths differ across the input sequence
    #[error("Inconsistent embedding dimensions: expected {expected}, found {found} at index {index}")]
    InconsistentDimensions {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// Requested topic count outside `[1, N]`
    #[error("Invalid topic count {n_topics} for {n_points} points (must be in [1, {n_points}])")]
    InvalidTopicCount { n_topics: usize, n_points: usize },
}
