//! Typed artifact readers and writers.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use report_types::{Argument, ClusterAssignment, ClusterLabel, ClusterTakeaway, EmbeddingRecord};

use crate::error::ArtifactError;
use crate::layout::ArtifactLayout;

/// Reads and writes one dataset's artifacts.
pub struct ArtifactStore {
    layout: ArtifactLayout,
}

impl ArtifactStore {
    /// Store over the given layout.
    pub fn new(layout: ArtifactLayout) -> Self {
        Self { layout }
    }

    /// Store rooted at a dataset directory.
    pub fn at(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(ArtifactLayout::new(dir))
    }

    /// The underlying layout.
    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Read the arguments table (produced by the extraction collaborator).
    pub fn read_arguments(&self) -> Result<Vec<Argument>, ArtifactError> {
        self.read_csv(&self.layout.args(), "extraction")
    }

    /// Read the embeddings table (produced by the embedding collaborator).
    pub fn read_embeddings(&self) -> Result<Vec<EmbeddingRecord>, ArtifactError> {
        let path = self.layout.embeddings();
        require(&path, "embedding")?;
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Read the cluster assignment table.
    pub fn read_assignments(&self) -> Result<Vec<ClusterAssignment>, ArtifactError> {
        self.read_csv(&self.layout.clusters(), "cluster")
    }

    /// Write the cluster assignment table.
    pub fn write_assignments(&self, rows: &[ClusterAssignment]) -> Result<(), ArtifactError> {
        self.write_csv(&self.layout.clusters(), rows)
    }

    /// Read the cluster labels table.
    pub fn read_labels(&self) -> Result<Vec<ClusterLabel>, ArtifactError> {
        self.read_csv(&self.layout.labels(), "summarize")
    }

    /// Read the cluster takeaways table.
    pub fn read_takeaways(&self) -> Result<Vec<ClusterTakeaway>, ArtifactError> {
        self.read_csv(&self.layout.takeaways(), "summarize")
    }

    /// Write the labels and takeaways tables together.
    ///
    /// The two tables form one logical artifact of the summarize stage, so
    /// they are written in one operation once the whole stage has succeeded.
    pub fn write_summaries(
        &self,
        labels: &[ClusterLabel],
        takeaways: &[ClusterTakeaway],
    ) -> Result<(), ArtifactError> {
        self.write_csv(&self.layout.labels(), labels)?;
        self.write_csv(&self.layout.takeaways(), takeaways)
    }

    /// Read the overview narrative.
    pub fn read_overview(&self) -> Result<String, ArtifactError> {
        let path = self.layout.overview();
        require(&path, "overview")?;
        Ok(fs::read_to_string(&path)?)
    }

    /// Write the overview narrative.
    pub fn write_overview(&self, overview: &str) -> Result<(), ArtifactError> {
        let path = self.layout.overview();
        self.ensure_dir()?;
        fs::write(&path, overview)?;
        info!(path = %path.display(), "Artifact written");
        Ok(())
    }

    /// Write the translation table as pretty-printed JSON.
    pub fn write_translations(&self, table: &Map<String, Value>) -> Result<(), ArtifactError> {
        let path = self.layout.translations();
        self.ensure_dir()?;
        fs::write(&path, serde_json::to_string_pretty(table)?)?;
        info!(path = %path.display(), entries = table.len(), "Artifact written");
        Ok(())
    }

    /// Read the translation table.
    pub fn read_translations(&self) -> Result<Map<String, Value>, ArtifactError> {
        let path = self.layout.translations();
        require(&path, "translate")?;
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the embeddings table.
    ///
    /// The pipeline itself never computes embeddings; this exists so tests
    /// and external tooling can seed a dataset.
    pub fn write_embeddings(&self, rows: &[EmbeddingRecord]) -> Result<(), ArtifactError> {
        let path = self.layout.embeddings();
        self.ensure_dir()?;
        fs::write(&path, serde_json::to_string(rows)?)?;
        Ok(())
    }

    /// Write the arguments table.
    pub fn write_arguments(&self, rows: &[Argument]) -> Result<(), ArtifactError> {
        self.write_csv(&self.layout.args(), rows)
    }

    fn read_csv<T: DeserializeOwned>(
        &self,
        path: &Path,
        produced_by: &'static str,
    ) -> Result<Vec<T>, ArtifactError> {
        require(path, produced_by)?;
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn write_csv<T: Serialize>(&self, path: &Path, rows: &[T]) -> Result<(), ArtifactError> {
        self.ensure_dir()?;
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = rows.len(), "Artifact written");
        Ok(())
    }

    fn ensure_dir(&self) -> Result<(), ArtifactError> {
        fs::create_dir_all(self.layout.dir())?;
        Ok(())
    }
}

fn require(path: &Path, produced_by: &'static str) -> Result<(), ArtifactError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ArtifactError::Missing {
            path: path.to_path_buf(),
            produced_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ArtifactStore) {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::at(dir.path().join("dataset"));
        (dir, store)
    }

    #[test]
    fn test_arguments_roundtrip() {
        let (_dir, store) = store();
        let rows = vec![
            Argument {
                arg_id: "A1_0".to_string(),
                comment_id: "A1".to_string(),
                text: "More bike lanes, please".to_string(),
            },
            Argument {
                arg_id: "A2_0".to_string(),
                comment_id: "A2".to_string(),
                text: "Text with, commas and \"quotes\"".to_string(),
            },
        ];
        store.write_arguments(&rows).unwrap();
        assert_eq!(store.read_arguments().unwrap(), rows);
    }

    #[test]
    fn test_arguments_header_names() {
        let (_dir, store) = store();
        store
            .write_arguments(&[Argument {
                arg_id: "A1_0".to_string(),
                comment_id: "A1".to_string(),
                text: "text".to_string(),
            }])
            .unwrap();
        let raw = std::fs::read_to_string(store.layout().args()).unwrap();
        let header = raw.lines().next().unwrap();
        assert_eq!(header, "arg-id,comment-id,argument");
    }

    #[test]
    fn test_assignments_roundtrip_and_header() {
        let (_dir, store) = store();
        let rows = vec![ClusterAssignment {
            arg_id: "A1_0".to_string(),
            x: 1.5,
            y: -2.25,
            probability: 1.0,
            cluster_id: 4,
        }];
        store.write_assignments(&rows).unwrap();
        assert_eq!(store.read_assignments().unwrap(), rows);

        let raw = std::fs::read_to_string(store.layout().clusters()).unwrap();
        assert_eq!(raw.lines().next().unwrap(), "arg-id,x,y,probability,cluster-id");
    }

    #[test]
    fn test_summaries_written_together() {
        let (_dir, store) = store();
        let labels = vec![ClusterLabel {
            cluster_id: 0,
            label: "Cycling".to_string(),
        }];
        let takeaways = vec![ClusterTakeaway {
            cluster_id: 0,
            takeaways: "More lanes wanted.".to_string(),
        }];
        store.write_summaries(&labels, &takeaways).unwrap();
        assert_eq!(store.read_labels().unwrap(), labels);
        assert_eq!(store.read_takeaways().unwrap(), takeaways);
    }

    #[test]
    fn test_embeddings_roundtrip() {
        let (_dir, store) = store();
        let rows = vec![EmbeddingRecord {
            arg_id: "A1_0".to_string(),
            embedding: vec![0.25, -0.5, 1.0],
        }];
        store.write_embeddings(&rows).unwrap();
        assert_eq!(store.read_embeddings().unwrap(), rows);
    }

    #[test]
    fn test_overview_roundtrip() {
        let (_dir, store) = store();
        store.write_overview("The consultation showed...").unwrap();
        assert_eq!(store.read_overview().unwrap(), "The consultation showed...");
    }

    #[test]
    fn test_translations_roundtrip() {
        let (_dir, store) = store();
        let mut table = Map::new();
        table.insert(
            "hello".to_string(),
            serde_json::json!(["bonjour", "hola"]),
        );
        store.write_translations(&table).unwrap();
        assert_eq!(store.read_translations().unwrap(), table);
    }

    #[test]
    fn test_missing_artifact_names_stage() {
        let (_dir, store) = store();
        match store.read_assignments() {
            Err(ArtifactError::Missing { produced_by, .. }) => {
                assert_eq!(produced_by, "cluster");
            }
            other => panic!("expected Missing, got {other:?}"),
        }
        match store.read_labels() {
            Err(ArtifactError::Missing { produced_by, .. }) => {
                assert_eq!(produced_by, "summarize");
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }
}
