//! Discover command implementation
//!
//! Prints the manifests a `localize` run over the same root would export,
//! one per line, without exporting anything.

use crate::core::discovery::discover_roots;
use clap::Args;

/// Arguments for the discover command
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Template folder or `template.json` file
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Only look at the root itself, not at folders below it
    #[arg(long)]
    pub non_recursive: bool,
}

impl DiscoverArgs {
    /// Execute the discover command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(root = %self.root, recursive = !self.non_recursive, "Discovering templates");

        match discover_roots(&[self.root.as_str()], !self.non_recursive) {
            Ok(manifests) => {
                for manifest in &manifests {
                    println!("{manifest}");
                }
                tracing::info!(count = manifests.len(), "Discovery completed");
                Ok(0)
            }
            Err(e) if e.is_configuration() => {
                eprintln!("{e}");
                Ok(2)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_lists_manifests() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("a/.template.config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("template.json"), "{}").unwrap();

        let args = DiscoverArgs {
            root: dir.path().to_string_lossy().into_owned(),
            non_recursive: false,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }

    #[test]
    fn test_discover_empty_folder_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let args = DiscoverArgs {
            root: dir.path().to_string_lossy().into_owned(),
            non_recursive: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
    }

    #[test]
    fn test_discover_blank_root() {
        let args = DiscoverArgs {
            root: " ".to_string(),
            non_recursive: true,
        };
        assert_eq!(args.execute().unwrap(), 2);
    }
}
