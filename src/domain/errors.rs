//! Domain error types
//!
//! Every fallible operation in the library returns [`LocalizeError`]. The
//! variants separate the fatal preconditions of a localization run from the
//! per-file failures that only ever surface as diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// Missing or invalid configuration, including an unset template root
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Discovery over a designated root produced no manifests
    #[error("No template.json files were found in the folder {}", root.display())]
    DiscoveryEmpty {
        /// Root that contributed nothing
        root: PathBuf,
    },

    /// A single export failed
    #[error("Export error: {0}")]
    Export(String),

    /// A single export was cancelled before it completed
    #[error("Export was cancelled")]
    Cancelled,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Async runtime could not be created
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl LocalizeError {
    /// Whether this error is one of the fatal preconditions checked before
    /// any export is dispatched
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LocalizeError::Configuration(_) | LocalizeError::DiscoveryEmpty { .. }
        )
    }
}

impl From<std::io::Error> for LocalizeError {
    fn from(err: std::io::Error) -> Self {
        LocalizeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LocalizeError {
    fn from(err: serde_json::Error) -> Self {
        LocalizeError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LocalizeError {
    fn from(err: toml::de::Error) -> Self {
        LocalizeError::Configuration(format!("TOML parse error: {err}"))
    }
}
