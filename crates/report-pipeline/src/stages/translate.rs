//! Translation stage.

use report_artifacts::{ArtifactError, ArtifactStore};
use report_llm::LlmClient;
use report_translate::TranslationMemoizer;
use report_types::{LogProgress, NoProgress, PipelineConfig, ProgressSink};
use tracing::{info, warn};

use crate::error::PipelineError;

/// Translate all report texts into the configured languages.
///
/// Feeds the translatable config fields, the argument texts, the cluster
/// labels and takeaways, and the overview (when present) through one
/// memoizer, then writes `translations.json`. With no languages configured
/// the stage writes an empty table and makes no LLM calls.
///
/// A missing `overview.txt` is tolerated: the overview stage is optional
/// for a translated report, so the stage logs and moves on.
pub async fn run_translate(
    config: &PipelineConfig,
    store: &ArtifactStore,
    llm: &dyn LlmClient,
) -> Result<(), PipelineError> {
    let mut memoizer = TranslationMemoizer::new(
        llm,
        &config.translation.model,
        config.translation.languages.clone(),
    );

    if !memoizer.is_enabled() {
        info!("No target languages configured, writing empty translation table");
        store.write_translations(&memoizer.into_table())?;
        return Ok(());
    }

    memoizer
        .add_source(config.translatable_fields(), &NoProgress)
        .await?;

    let arguments = store.read_arguments()?;
    let progress = LogProgress::new("translate");
    progress.set_total(arguments.len() as u64);
    memoizer
        .add_source(arguments.iter().map(|a| a.text.as_str()), &progress)
        .await?;

    let labels = store.read_labels()?;
    memoizer
        .add_source(labels.iter().map(|l| l.label.as_str()), &NoProgress)
        .await?;

    let takeaways = store.read_takeaways()?;
    memoizer
        .add_source(takeaways.iter().map(|t| t.takeaways.as_str()), &NoProgress)
        .await?;

    match store.read_overview() {
        Ok(overview) => {
            // Externally authored overviews may carry a trailing newline;
            // key the table by the trimmed text.
            memoizer.add_source([overview.trim()], &NoProgress).await?;
        }
        Err(ArtifactError::Missing { .. }) => {
            warn!("No overview artifact found, skipping it");
        }
        Err(e) => return Err(e.into()),
    }

    let table = memoizer.into_table();
    info!(
        entries = table.len(),
        languages = config.translation.languages.len(),
        "Translation stage complete"
    );
    store.write_translations(&table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_llm::MockLlmClient;
    use report_types::{Argument, ClusterLabel, ClusterTakeaway};
    use tempfile::TempDir;

    /// Mock that answers "<language>:<text>" by parsing the request prompt.
    fn translating_mock() -> MockLlmClient {
        MockLlmClient::from_fn(|_, _, user| {
            let language = user
                .strip_prefix("Translate the following text to ")
                .and_then(|rest| rest.split('.').next())
                .unwrap();
            let text = user.split("\n\n").nth(1).unwrap();
            Ok(format!("{language}:{text}"))
        })
    }

    fn seeded_store() -> (TempDir, ArtifactStore) {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::at(dir.path().join("dataset"));
        store
            .write_arguments(&[
                Argument {
                    arg_id: "A0".to_string(),
                    comment_id: "C0".to_string(),
                    text: "bike lanes".to_string(),
                },
                Argument {
                    arg_id: "A1".to_string(),
                    comment_id: "C1".to_string(),
                    text: "bus fares".to_string(),
                },
            ])
            .unwrap();
        store
            .write_summaries(
                &[
                    ClusterLabel {
                        cluster_id: 0,
                        label: "Cycling".to_string(),
                    },
                    ClusterLabel {
                        cluster_id: 1,
                        label: "Transit".to_string(),
                    },
                    ClusterLabel {
                        cluster_id: 2,
                        label: "Parking".to_string(),
                    },
                ],
                &[
                    ClusterTakeaway {
                        cluster_id: 0,
                        takeaways: "More lanes wanted.".to_string(),
                    },
                    ClusterTakeaway {
                        cluster_id: 1,
                        takeaways: "Cheaper fares wanted.".to_string(),
                    },
                    ClusterTakeaway {
                        cluster_id: 2,
                        takeaways: "Fewer cars downtown.".to_string(),
                    },
                ],
            )
            .unwrap();
        store.write_overview("The consultation showed...").unwrap();
        (dir, store)
    }

    fn config(languages: &[&str]) -> PipelineConfig {
        serde_json::from_value(serde_json::json!({
            "question": "What should change?",
            "translation": { "languages": languages }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_translate_stage_covers_all_sources() {
        let (_dir, store) = seeded_store();
        let mock = translating_mock();

        run_translate(&config(&["fr", "es"]), &store, &mock)
            .await
            .unwrap();

        let table = store.read_translations().unwrap();
        // question + 2 arguments + 3 labels + 3 takeaways + overview.
        assert_eq!(table.len(), 10);
        for value in table.values() {
            assert_eq!(value.as_array().unwrap().len(), 2);
        }
        assert_eq!(
            table["Cycling"],
            serde_json::json!(["fr:Cycling", "es:Cycling"])
        );
        assert_eq!(
            table["What should change?"],
            serde_json::json!(["fr:What should change?", "es:What should change?"])
        );
    }

    #[tokio::test]
    async fn test_translate_stage_empty_languages_writes_empty_table() {
        let (_dir, store) = seeded_store();
        let mock = translating_mock();

        run_translate(&config(&[]), &store, &mock).await.unwrap();

        assert!(store.read_translations().unwrap().is_empty());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_stage_tolerates_missing_overview() {
        let (_dir, store) = seeded_store();
        std::fs::remove_file(store.layout().overview()).unwrap();
        let mock = translating_mock();

        run_translate(&config(&["fr"]), &store, &mock).await.unwrap();

        let table = store.read_translations().unwrap();
        assert_eq!(table.len(), 9);
        assert!(!table.contains_key("The consultation showed..."));
    }

    #[tokio::test]
    async fn test_translate_stage_keys_overview_trimmed() {
        let (_dir, store) = seeded_store();
        std::fs::write(
            store.layout().overview(),
            "The consultation showed...\n",
        )
        .unwrap();
        let mock = translating_mock();

        run_translate(&config(&["fr"]), &store, &mock).await.unwrap();

        let table = store.read_translations().unwrap();
        assert!(table.contains_key("The consultation showed..."));
        assert!(!table.contains_key("The consultation showed...\n"));
    }

    #[tokio::test]
    async fn test_translate_stage_failure_writes_nothing() {
        let (_dir, store) = seeded_store();
        let mock = MockLlmClient::failing("socket closed");

        let result = run_translate(&config(&["fr"]), &store, &mock).await;
        assert!(matches!(result, Err(PipelineError::Translate(_))));
        assert!(!store.layout().translations().exists());
    }

    #[tokio::test]
    async fn test_translate_stage_dedups_repeated_texts() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::at(dir.path().join("dataset"));
        store
            .write_arguments(&[
                Argument {
                    arg_id: "A0".to_string(),
                    comment_id: "C0".to_string(),
                    text: "same text".to_string(),
                },
                Argument {
                    arg_id: "A1".to_string(),
                    comment_id: "C1".to_string(),
                    text: "same text".to_string(),
                },
            ])
            .unwrap();
        store
            .write_summaries(
                &[ClusterLabel {
                    cluster_id: 0,
                    label: "same text".to_string(),
                }],
                &[ClusterTakeaway {
                    cluster_id: 0,
                    takeaways: "same text".to_string(),
                }],
            )
            .unwrap();
        store.write_overview("same text").unwrap();
        let mock = translating_mock();

        run_translate(&config(&["fr"]), &store, &mock).await.unwrap();

        // question + the one deduplicated text, one language each.
        assert_eq!(mock.calls(), 2);
        let table = store.read_translations().unwrap();
        assert_eq!(table.len(), 2);
    }
}
