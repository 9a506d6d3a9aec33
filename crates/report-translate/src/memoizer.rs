//! The translation memoizer.

use report_llm::LlmClient;
use report_types::ProgressSink;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TranslateError;

/// Memoizing translator over a fixed list of target languages.
///
/// Feed text sources in their fixed stage order through [`add_source`];
/// each distinct non-blank text is translated once per language, in
/// language-request order, and recorded under its source text. The final
/// table preserves first-seen key order.
///
/// With an empty language list the memoizer is inert: no calls are made and
/// the resulting table is empty regardless of input.
///
/// [`add_source`]: TranslationMemoizer::add_source
pub struct TranslationMemoizer<'a> {
    llm: &'a dyn LlmClient,
    model: String,
    languages: Vec<String>,
    table: Map<String, Value>,
}

impl<'a> TranslationMemoizer<'a> {
    /// Create a memoizer for the given model and target languages.
    pub fn new(
        llm: &'a dyn LlmClient,
        model: impl Into<String>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            llm,
            model: model.into(),
            languages,
            table: Map::new(),
        }
    }

    /// Whether any target languages were requested.
    pub fn is_enabled(&self) -> bool {
        !self.languages.is_empty()
    }

    /// Translate one source of texts, reusing already-memoized entries.
    ///
    /// Progress advances one unit per text regardless of whether a call was
    /// made; the caller decides which source's length is declared as the
    /// stage total.
    pub async fn add_source<I, S>(
        &mut self,
        texts: I,
        progress: &dyn ProgressSink,
    ) -> Result<(), TranslateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            let text = text.as_ref();
            if self.is_enabled() && !text.trim().is_empty() && !self.table.contains_key(text) {
                let translations = self.translate_all(text).await?;
                self.table.insert(
                    text.to_string(),
                    Value::Array(translations.into_iter().map(Value::String).collect()),
                );
            }
            progress.advance(1);
        }
        Ok(())
    }

    /// Finish and return the table, keyed by source text in first-seen
    /// order, each value an array with one translation per requested
    /// language in request order.
    pub fn into_table(self) -> Map<String, Value> {
        self.table
    }

    async fn translate_all(&self, text: &str) -> Result<Vec<String>, TranslateError> {
        let mut translations = Vec::with_capacity(self.languages.len());
        for language in &self.languages {
            debug!(language = %language, "Translating text");
            let translation = self.translate_text(text, language).await.map_err(|source| {
                TranslateError::Call {
                    language: language.clone(),
                    source,
                }
            })?;
            translations.push(translation);
        }
        Ok(translations)
    }

    async fn translate_text(
        &self,
        text: &str,
        language: &str,
    ) -> Result<String, report_llm::LlmError> {
        let user = format!(
            "Translate the following text to {language}. Return only the translation \
             without any additional text or explanation:\n\n{text}"
        );
        let response = self.llm.complete(&self.model, "", &user).await?;
        Ok(response.text().trim().to_string())
    }
}
