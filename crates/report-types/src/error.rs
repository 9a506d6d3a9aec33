//! Configuration error type.

use thiserror::Error;

/// Errors raised while loading or validating pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or parsed
    #[error("Configuration error: {0}")]
    Load(String),

    /// Config loaded but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
