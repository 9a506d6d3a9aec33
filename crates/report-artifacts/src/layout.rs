//! On-disk layout of a dataset's artifacts.

use std::path::{Path, PathBuf};

/// Paths of all artifacts for one dataset directory.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    dir: PathBuf,
}

impl ArtifactLayout {
    /// Layout rooted at the dataset's output directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The dataset directory itself.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Arguments table (input).
    pub fn args(&self) -> PathBuf {
        self.dir.join("args.csv")
    }

    /// Embeddings table (input, produced by the embedding collaborator).
    pub fn embeddings(&self) -> PathBuf {
        self.dir.join("embeddings.json")
    }

    /// Cluster assignment table.
    pub fn clusters(&self) -> PathBuf {
        self.dir.join("clusters.csv")
    }

    /// Cluster labels table.
    pub fn labels(&self) -> PathBuf {
        self.dir.join("labels.csv")
    }

    /// Cluster takeaways table.
    pub fn takeaways(&self) -> PathBuf {
        self.dir.join("takeaways.csv")
    }

    /// Overview narrative.
    pub fn overview(&self) -> PathBuf {
        self.dir.join("overview.txt")
    }

    /// Translation table.
    pub fn translations(&self) -> PathBuf {
        self.dir.join("translations.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ArtifactLayout::new("outputs/demo");
        assert_eq!(layout.args(), PathBuf::from("outputs/demo/args.csv"));
        assert_eq!(layout.clusters(), PathBuf::from("outputs/demo/clusters.csv"));
        assert_eq!(
            layout.translations(),
            PathBuf::from("outputs/demo/translations.json")
        );
    }
}
