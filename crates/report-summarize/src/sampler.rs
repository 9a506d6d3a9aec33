//! Contrastive argument sampling.
//!
//! Grounds LLM summarization in what makes a cluster distinctive: a bounded
//! uniform sample of arguments inside the cluster paired with a bounded
//! sample of arguments outside it.

use std::collections::HashMap;

use rand::seq::index::sample;
use report_types::{Argument, ClusterAssignment};

/// Paired in-cluster and out-of-cluster argument samples.
#[derive(Debug, Clone)]
pub struct ContrastiveSample {
    /// Arguments assigned to the target cluster
    pub inside: Vec<String>,

    /// Arguments assigned to any other cluster
    pub outside: Vec<String>,
}

/// Draw a contrastive sample for `cluster_id`.
///
/// Both lists are drawn uniformly without replacement and capped at
/// `sample_size`; when a population is smaller than `sample_size` the whole
/// population is returned unsampled. Each call uses fresh randomness. Pure
/// function of its inputs otherwise.
pub fn contrastive_sample(
    arguments: &[Argument],
    assignments: &[ClusterAssignment],
    cluster_id: usize,
    sample_size: usize,
) -> ContrastiveSample {
    let texts: HashMap<&str, &str> = arguments
        .iter()
        .map(|a| (a.arg_id.as_str(), a.text.as_str()))
        .collect();

    let mut inside_pool: Vec<&str> = Vec::new();
    let mut outside_pool: Vec<&str> = Vec::new();
    for assignment in assignments {
        if let Some(&text) = texts.get(assignment.arg_id.as_str()) {
            if assignment.cluster_id == cluster_id {
                inside_pool.push(text);
            } else {
                outside_pool.push(text);
            }
        }
    }

    let mut rng = rand::rng();
    ContrastiveSample {
        inside: draw(&mut rng, &inside_pool, sample_size),
        outside: draw(&mut rng, &outside_pool, sample_size),
    }
}

fn draw<R: rand::Rng>(rng: &mut R, pool: &[&str], sample_size: usize) -> Vec<String> {
    let amount = pool.len().min(sample_size);
    sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].to_string())
        .collect()
}
