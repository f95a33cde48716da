//! Export request and result types
//!
//! These types form the boundary with the [`Exporter`](crate::adapters::exporter::Exporter)
//! collaborator: one [`ExportRequest`] goes out per manifest, one
//! [`ExportResult`] comes back.

use super::manifest::ManifestPath;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::sync::Arc;

/// Language exported when nothing else is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Shared, cloneable error attached to a failed export
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Options passed to the exporter for every manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Report what would be written without writing it
    pub dry_run: bool,

    /// Directory to write localization files to; exporter default when `None`
    pub target_directory: Option<String>,

    /// Languages to export
    pub languages: Vec<String>,
}

impl ExportOptions {
    /// Creates export options
    pub fn new(dry_run: bool, target_directory: Option<String>, languages: Vec<String>) -> Self {
        Self {
            dry_run,
            target_directory,
            languages,
        }
    }
}

impl Default for ExportOptions {
    /// No dry run, no target directory override, English only
    fn default() -> Self {
        Self::new(false, None, vec![DEFAULT_LANGUAGE.to_string()])
    }
}

/// One manifest paired with the options it is exported with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Manifest to export
    pub manifest: ManifestPath,

    /// Options for this export
    pub options: ExportOptions,
}

impl ExportRequest {
    /// Creates a new export request
    pub fn new(manifest: ManifestPath, options: ExportOptions) -> Self {
        Self { manifest, options }
    }
}

/// What the exporter reports after completing an export
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Manifest the result belongs to
    pub manifest: ManifestPath,

    /// Whether localization files were produced
    pub succeeded: bool,

    /// Human-readable reason when `succeeded` is false
    pub error_message: Option<String>,

    /// Underlying error when `succeeded` is false
    pub inner_cause: Option<Cause>,
}

impl ExportResult {
    /// Creates a successful result
    pub fn success(manifest: ManifestPath) -> Self {
        Self {
            manifest,
            succeeded: true,
            error_message: None,
            inner_cause: None,
        }
    }

    /// Creates a failed result with a message
    pub fn failure(manifest: ManifestPath, message: impl Into<String>) -> Self {
        Self {
            manifest,
            succeeded: false,
            error_message: Some(message.into()),
            inner_cause: None,
        }
    }

    /// Attaches the underlying error
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.inner_cause = Some(Arc::new(cause));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizeError;

    #[test]
    fn test_default_export_options() {
        let options = ExportOptions::default();
        assert!(!options.dry_run);
        assert!(options.target_directory.is_none());
        assert_eq!(options.languages, vec!["en".to_string()]);
    }

    #[test]
    fn test_export_result_failure_with_cause() {
        let manifest = ManifestPath::new("a/.template.config/template.json");
        let result = ExportResult::failure(manifest.clone(), "bad json")
            .with_cause(LocalizeError::Serialization("expected value".to_string()));

        assert_eq!(result.manifest, manifest);
        assert!(!result.succeeded);
        assert_eq!(result.error_message.as_deref(), Some("bad json"));
        assert_eq!(
            result.inner_cause.unwrap().to_string(),
            "Serialization error: expected value"
        );
    }
}
