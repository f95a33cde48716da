//! Manifest discovery
//!
//! Decides which files under a root are localization targets. A root may be
//! a single manifest file, a template directory, or a tree of templates.

use crate::domain::{LocalizeError, ManifestPath, Result, CONFIG_DIR_NAME, MANIFEST_FILE_NAME};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Discovers manifests under `path`
///
/// - An empty path, or one that is neither a file nor a directory, yields
///   nothing.
/// - An existing file is returned as-is; its name is not checked.
/// - A directory searched non-recursively yields
///   `.template.config/template.json` if present, otherwise a loose
///   `template.json`, otherwise nothing.
/// - A directory searched recursively yields every `template.json` in the
///   subtree whose parent directory is `.template.config`, in file-name walk
///   order.
///
/// Discovery never fails; unreadable subdirectories are skipped with a
/// warning.
///
/// # Examples
///
/// ```no_run
/// use template_localizer::core::discovery::discover;
///
/// for manifest in discover("templates", true) {
///     println!("{manifest}");
/// }
/// ```
pub fn discover(path: impl AsRef<Path>, recursive: bool) -> Vec<ManifestPath> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Vec::new();
    }

    if path.is_file() {
        return vec![ManifestPath::from(path)];
    }

    if !path.is_dir() {
        tracing::debug!(
            path = %path.display(),
            "Path is neither a file nor a directory"
        );
        return Vec::new();
    }

    if recursive {
        walk_for_manifests(path)
    } else {
        find_in_directory(path).into_iter().collect()
    }
}

/// Checks the two well-known manifest locations of one template directory
fn find_in_directory(dir: &Path) -> Option<ManifestPath> {
    let preferred = dir.join(CONFIG_DIR_NAME).join(MANIFEST_FILE_NAME);
    if preferred.is_file() {
        return Some(ManifestPath::new(preferred));
    }

    let loose = dir.join(MANIFEST_FILE_NAME);
    if loose.is_file() {
        return Some(ManifestPath::new(loose));
    }

    None
}

fn walk_for_manifests(root: &Path) -> Vec<ManifestPath> {
    let mut manifests = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(
                    root = %root.display(),
                    error = %e,
                    "Skipping unreadable entry during manifest discovery"
                );
                continue;
            }
        };

        if entry.file_name() != MANIFEST_FILE_NAME {
            continue;
        }

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let manifest = ManifestPath::from(entry.into_path());
        if manifest.is_in_config_dir() {
            manifests.push(manifest);
        } else {
            tracing::trace!(
                path = %manifest,
                "Ignoring template.json outside of .template.config"
            );
        }
    }

    manifests
}

/// Discovers manifests over several roots
///
/// Paths are returned in root order, then discovery order, with duplicates
/// removed. Every root must contribute at least one manifest not already
/// found under an earlier root.
///
/// # Errors
///
/// - [`LocalizeError::Configuration`] if `roots` is empty or any root is blank
/// - [`LocalizeError::DiscoveryEmpty`] naming the first root that contributed
///   nothing new
pub fn discover_roots<P: AsRef<Path>>(roots: &[P], recursive: bool) -> Result<Vec<ManifestPath>> {
    if roots.is_empty() {
        return Err(LocalizeError::Configuration(
            "Template folder is not set".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut manifests = Vec::new();

    for root in roots {
        let root = root.as_ref();
        if root.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(LocalizeError::Configuration(
                "Template folder is not set".to_string(),
            ));
        }

        let before = manifests.len();
        for manifest in discover(root, recursive) {
            if seen.insert(manifest.clone()) {
                manifests.push(manifest);
            }
        }

        if manifests.len() == before {
            return Err(LocalizeError::DiscoveryEmpty {
                root: root.to_path_buf(),
            });
        }

        tracing::debug!(
            root = %root.display(),
            found = manifests.len() - before,
            "Discovered template manifests"
        );
    }

    Ok(manifests)
}
