//! Pipeline configuration loading.
//!
//! Layered precedence: built-in defaults -> TOML config file -> environment
//! variables (REPORT_*). CLI flags are applied by the caller after load.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default system prompt for cluster labelling.
pub const DEFAULT_LABEL_PROMPT: &str = "You are labelling clusters of arguments \
from a public consultation. Given examples of arguments inside and outside one \
cluster, respond with a short label (at most ten words) capturing what makes the \
arguments inside the cluster distinctive. Respond with only the label.";

/// Default system prompt for cluster takeaways.
pub const DEFAULT_TAKEAWAY_PROMPT: &str = "You are summarizing clusters of \
arguments from a public consultation. Given examples of arguments inside one \
cluster, respond with a concise paragraph stating the key takeaway of the \
cluster. Respond with only the takeaway.";

/// Default system prompt for the cross-cluster overview.
pub const DEFAULT_OVERVIEW_PROMPT: &str = "You are writing the overview of a \
public consultation report. Given the labels and takeaways of all argument \
clusters, respond with a short narrative overview of the consultation as a \
whole. Respond with only the overview.";

/// Clustering stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringSettings {
    /// Number of topic clusters to produce
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Seed for the 2-D projection and the spectral partitioning.
    /// Identical input and seed reproduce identical output.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_clusters() -> usize {
    6
}

fn default_seed() -> u64 {
    42
}

impl Default for ClusteringSettings {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            seed: default_seed(),
        }
    }
}

/// Labelling stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabellingSettings {
    /// Maximum arguments sampled inside and outside each cluster
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// System prompt template
    #[serde(default = "default_label_prompt")]
    pub prompt: String,

    /// Model identifier passed to the LLM transport
    #[serde(default = "default_model")]
    pub model: String,
}

/// Takeaways stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeawaysSettings {
    /// Maximum arguments sampled inside and outside each cluster
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// System prompt template
    #[serde(default = "default_takeaway_prompt")]
    pub prompt: String,

    /// Model identifier passed to the LLM transport
    #[serde(default = "default_model")]
    pub model: String,
}

/// Overview stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewSettings {
    /// System prompt template
    #[serde(default = "default_overview_prompt")]
    pub prompt: String,

    /// Model identifier passed to the LLM transport
    #[serde(default = "default_model")]
    pub model: String,
}

/// Translation stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// Target languages in request order; empty means skip translation
    #[serde(default)]
    pub languages: Vec<String>,

    /// Model identifier passed to the LLM transport
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_sample_size() -> usize {
    30
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_label_prompt() -> String {
    DEFAULT_LABEL_PROMPT.to_string()
}

fn default_takeaway_prompt() -> String {
    DEFAULT_TAKEAWAY_PROMPT.to_string()
}

fn default_overview_prompt() -> String {
    DEFAULT_OVERVIEW_PROMPT.to_string()
}

impl Default for LabellingSettings {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            prompt: default_label_prompt(),
            model: default_model(),
        }
    }
}

impl Default for TakeawaysSettings {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            prompt: default_takeaway_prompt(),
            model: default_model(),
        }
    }
}

impl Default for OverviewSettings {
    fn default() -> Self {
        Self {
            prompt: default_overview_prompt(),
            model: default_model(),
        }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            model: default_model(),
        }
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Display name of the consultation (translated when present)
    #[serde(default)]
    pub name: Option<String>,

    /// The consultation question put to respondents
    pub question: String,

    /// Introductory text for the report (translated when present)
    #[serde(default)]
    pub intro: Option<String>,

    /// Directory holding this dataset's artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Clustering stage settings
    #[serde(default)]
    pub clustering: ClusteringSettings,

    /// Labelling stage settings
    #[serde(default)]
    pub labelling: LabellingSettings,

    /// Takeaways stage settings
    #[serde(default)]
    pub takeaways: TakeawaysSettings,

    /// Overview stage settings
    #[serde(default)]
    pub overview: OverviewSettings,

    /// Translation stage settings
    #[serde(default)]
    pub translation: TranslationSettings,
}

fn default_output_dir() -> String {
    "outputs/default".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PipelineConfig {
    /// Load configuration with layered precedence:
    /// 1. Built-in defaults (serde `default` attributes)
    /// 2. TOML config file at `path`
    /// 3. Environment variables (REPORT_*)
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path).required(true))
            .add_source(
                Environment::with_prefix("REPORT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let settings: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question.trim().is_empty() {
            return Err(ConfigError::Invalid("question must not be empty".into()));
        }
        if self.clustering.clusters == 0 {
            return Err(ConfigError::Invalid(
                "clustering.clusters must be >= 1".into(),
            ));
        }
        if self.labelling.sample_size == 0 {
            return Err(ConfigError::Invalid(
                "labelling.sample_size must be >= 1".into(),
            ));
        }
        if self.takeaways.sample_size == 0 {
            return Err(ConfigError::Invalid(
                "takeaways.sample_size must be >= 1".into(),
            ));
        }
        if self.translation.languages.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "translation.languages must not contain blank entries".into(),
            ));
        }
        Ok(())
    }

    /// Config fields that are translated alongside the report artifacts,
    /// in their fixed order: name, question, intro.
    pub fn translatable_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(name) = self.name.as_deref() {
            fields.push(name);
        }
        fields.push(self.question.as_str());
        if let Some(intro) = self.intro.as_deref() {
            fields.push(intro);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal_config() -> PipelineConfig {
        PipelineConfig {
            name: None,
            question: "How should the city improve cycling?".to_string(),
            intro: None,
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            clustering: ClusteringSettings::default(),
            labelling: LabellingSettings::default(),
            takeaways: TakeawaysSettings::default(),
            overview: OverviewSettings::default(),
            translation: TranslationSettings::default(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = minimal_config();
        assert_eq!(config.clustering.clusters, 6);
        assert_eq!(config.clustering.seed, 42);
        assert_eq!(config.labelling.sample_size, 30);
        assert_eq!(config.labelling.model, "gpt-4o-mini");
        assert!(config.translation.languages.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_question() {
        let mut config = minimal_config();
        config.question = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_clusters() {
        let mut config = minimal_config();
        config.clustering.clusters = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_language() {
        let mut config = minimal_config();
        config.translation.languages = vec!["fr".to_string(), "".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_translatable_fields_order() {
        let mut config = minimal_config();
        config.name = Some("Cycling consultation".to_string());
        config.intro = Some("We asked residents about cycling.".to_string());
        let fields = config.translatable_fields();
        assert_eq!(
            fields,
            vec![
                "Cycling consultation",
                "How should the city improve cycling?",
                "We asked residents about cycling.",
            ]
        );
    }

    #[test]
    fn test_translatable_fields_skips_absent() {
        let config = minimal_config();
        assert_eq!(
            config.translatable_fields(),
            vec!["How should the city improve cycling?"]
        );
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
question = "What should change?"
output_dir = "outputs/demo"

[clustering]
clusters = 4
seed = 7

[translation]
languages = ["fr", "es"]
"#
        )
        .unwrap();

        let config = PipelineConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.question, "What should change?");
        assert_eq!(config.clustering.clusters, 4);
        assert_eq!(config.clustering.seed, 7);
        assert_eq!(config.translation.languages, vec!["fr", "es"]);
        // Untouched sections keep defaults
        assert_eq!(config.labelling.sample_size, 30);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = PipelineConfig::load("/nonexistent/config.toml");
        assert!(result.is_err());
    }
}
