//! Manifest path newtype
//!
//! A [`ManifestPath`] is the resolved location of one `template.json` file.
//! Discovery produces them, the orchestrator consumes them, and diagnostics
//! name them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name every template manifest carries
pub const MANIFEST_FILE_NAME: &str = "template.json";

/// Directory name that marks a manifest as a localization target
pub const CONFIG_DIR_NAME: &str = ".template.config";

/// Resolved path to one template manifest
///
/// # Examples
///
/// ```
/// use template_localizer::domain::ManifestPath;
///
/// let manifest = ManifestPath::new("/proj/a/.template.config/template.json");
/// assert!(manifest.is_in_config_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestPath(PathBuf);

impl ManifestPath {
    /// Creates a new manifest path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consumes self and returns the inner PathBuf
    pub fn into_inner(self) -> PathBuf {
        self.0
    }

    /// Whether the manifest sits directly inside a `.template.config` directory
    pub fn is_in_config_dir(&self) -> bool {
        self.0
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == CONFIG_DIR_NAME)
    }
}

impl fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ManifestPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ManifestPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for ManifestPath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}
