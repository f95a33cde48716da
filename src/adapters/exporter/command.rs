//! Exporter backed by an external program
//!
//! Each export runs the configured program once, with placeholders in the
//! configured arguments expanded for the manifest being exported:
//!
//! | Placeholder    | Expands to                                  |
//! |----------------|---------------------------------------------|
//! | `{manifest}`   | path of the manifest                        |
//! | `{languages}`  | languages joined with `,`                   |
//! | `{target_dir}` | target directory, empty when unset          |
//! | `{dry_run}`    | `true` or `false`                           |
//!
//! An argument that consisted of placeholders and expands to nothing is
//! dropped.

use super::traits::Exporter;
use crate::config::ExporterConfig;
use crate::domain::{
    CancellationSignal, ExportOptions, ExportResult, LocalizeError, ManifestPath, Result,
};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs an external program per manifest
#[derive(Debug, Clone)]
pub struct CommandExporter {
    config: ExporterConfig,
}

impl CommandExporter {
    /// Creates a new command exporter
    pub fn new(config: ExporterConfig) -> Self {
        Self { config }
    }

    /// Program this exporter runs
    pub fn program(&self) -> &str {
        &self.config.program
    }

    /// Expands the configured arguments for one manifest
    pub fn build_args(&self, manifest: &ManifestPath, options: &ExportOptions) -> Vec<String> {
        let manifest = manifest.to_string();
        let languages = options.languages.join(",");
        let target_dir = options.target_directory.clone().unwrap_or_default();
        let dry_run = options.dry_run.to_string();

        self.config
            .args
            .iter()
            .filter_map(|arg| {
                let expanded = arg
                    .replace("{manifest}", &manifest)
                    .replace("{languages}", &languages)
                    .replace("{target_dir}", &target_dir)
                    .replace("{dry_run}", &dry_run);
                if expanded.is_empty() && !arg.is_empty() {
                    None
                } else {
                    Some(expanded)
                }
            })
            .collect()
    }
}

#[async_trait]
impl Exporter for CommandExporter {
    async fn export(
        &self,
        manifest: &ManifestPath,
        options: &ExportOptions,
        mut cancellation: CancellationSignal,
    ) -> Result<ExportResult> {
        let args = self.build_args(manifest, options);

        tracing::debug!(
            manifest = %manifest,
            program = %self.config.program,
            args = ?args,
            "Running exporter"
        );

        let mut command = Command::new(&self.config.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.config.working_directory {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|e| {
            LocalizeError::Export(format!(
                "Failed to start exporter '{}': {}",
                self.config.program, e
            ))
        })?;

        // Dropping the wait future on cancellation kills the child.
        let output = tokio::select! {
            output = child.wait_with_output() => output.map_err(|e| {
                LocalizeError::Export(format!(
                    "Failed to wait for exporter '{}': {}",
                    self.config.program, e
                ))
            })?,
            _ = cancellation.cancelled() => return Err(LocalizeError::Cancelled),
        };

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
                tracing::trace!(manifest = %manifest, "{}", line);
            }
            return Ok(ExportResult::success(manifest.clone()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("exporter exited with {}", output.status)
        } else {
            stderr.to_string()
        };

        Ok(ExportResult::failure(manifest.clone(), message))
    }
}
