//! Localize command implementation
//!
//! This module implements the `localize` command: discover every template
//! under the given folders, export them all, and report.

use crate::config::{load_config_or_default, LocalizerConfig};
use crate::core::export::build_runtime;
use crate::core::report::LocalizationSummary;
use crate::core::Localizer;
use crate::domain::CancellationSource;
use crate::log_error_with_context;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the localize command
#[derive(Args, Debug)]
pub struct LocalizeArgs {
    /// Template folders or `template.json` files; falls back to
    /// `templates.folders` in the configuration, then `TLOC_TEMPLATE_FOLDER`
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Only look at the root itself, not at folders below it
    #[arg(long)]
    pub non_recursive: bool,

    /// Language to export (repeatable); overrides `export.languages`
    #[arg(long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Directory the localization files are written to
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<String>,

    /// Dry run mode - the exporter reports without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl LocalizeArgs {
    /// Execute the localize command
    pub fn execute(&self, config_path: &str, explicit: bool) -> anyhow::Result<i32> {
        tracing::info!("Starting localize command");

        let mut config = match load_config_or_default(config_path, explicit) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let roots = self.resolve_roots(&config);
        let localizer = Localizer::from_config(&config);
        let cancel_on_interrupt = config.export.cancel_on_interrupt;

        let runtime = build_runtime()?;
        let (result, interrupted) = runtime.block_on(async {
            let source = Arc::new(CancellationSource::new());

            let listener = cancel_on_interrupt.then(|| {
                let source = source.clone();
                tokio::spawn(async move {
                    wait_for_interrupt().await;
                    eprintln!("\n⚠️  Interrupt received, cancelling pending exports...");
                    source.cancel();
                })
            });

            let result = localizer.localize(roots.as_slice(), source.signal()).await;

            if let Some(listener) = listener {
                listener.abort();
            }
            (result, source.is_cancelled())
        });

        let summary = match result {
            Ok(summary) => summary,
            Err(e) if e.is_configuration() => {
                log_error_with_context!(&e, "Localization could not start");
                eprintln!("{e}");
                return Ok(2);
            }
            Err(e) => return Err(e.into()),
        };

        print_summary(&summary);

        if let Some(path) = &self.report {
            summary
                .write_json(path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("📝 Report written to {}", path.display());
        }

        Ok(exit_code(&summary, interrupted))
    }

    /// Applies command-line options on top of the configuration
    fn apply_overrides(&self, config: &mut LocalizerConfig) {
        if self.non_recursive {
            config.templates.recursive = false;
        }

        if !self.languages.is_empty() {
            tracing::info!(languages = ?self.languages, "Overriding languages from CLI");
            config.export.languages = self.languages.clone();
        }

        if let Some(dir) = &self.target_dir {
            tracing::info!(target_dir = %dir, "Overriding target directory from CLI");
            config.export.target_directory = Some(dir.clone());
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }

    /// Roots from the command line, otherwise from the configuration
    ///
    /// `TLOC_TEMPLATE_FOLDER` has already been folded into
    /// `templates.folders` by the loader when the file names none.
    fn resolve_roots(&self, config: &LocalizerConfig) -> Vec<String> {
        if self.roots.is_empty() {
            config.templates.folders.clone()
        } else {
            self.roots.clone()
        }
    }
}

fn print_summary(summary: &LocalizationSummary) {
    println!();
    println!("📊 Localization Summary:");
    println!("  Templates: {}", summary.total);
    println!("  Succeeded: {}", summary.succeeded);
    println!("  Failed: {}", summary.failed);
    println!("  Cancelled: {}", summary.cancelled);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.failed > 0 {
        println!("⚠️  Localization completed with failures");
    } else {
        println!("✅ Localization completed successfully!");
    }
}

fn exit_code(summary: &LocalizationSummary, interrupted: bool) -> i32 {
    if interrupted {
        tracing::info!("Localization interrupted by user signal");
        130 // SIGINT exit code (standard Unix convention)
    } else if summary.success {
        0
    } else {
        1
    }
}

/// Resolves on Ctrl+C or SIGTERM; never resolves if no handler could be
/// installed
async fn wait_for_interrupt() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if let Err(e) = result {
                            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                            std::future::pending::<()>().await;
                        }
                        tracing::info!("Received SIGINT (Ctrl+C), cancelling exports");
                    }
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM, cancelling exports");
                    }
                }
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
            }
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received SIGINT (Ctrl+C), cancelling exports");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn args() -> LocalizeArgs {
        LocalizeArgs {
            roots: Vec::new(),
            non_recursive: false,
            languages: Vec::new(),
            target_dir: None,
            dry_run: false,
            report: None,
        }
    }

    fn summary(outcomes: &[crate::domain::Outcome]) -> LocalizationSummary {
        let outcomes: Vec<_> = outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| (crate::domain::ManifestPath::new(format!("{i}")), o.clone()))
            .collect();
        LocalizationSummary::from_outcomes(&outcomes, Vec::new(), Utc::now(), Duration::ZERO)
    }

    #[test]
    fn test_overrides_leave_config_alone_by_default() {
        let mut config = LocalizerConfig::default();
        args().apply_overrides(&mut config);

        assert!(config.templates.recursive);
        assert_eq!(config.export.languages, vec!["en".to_string()]);
        assert!(config.export.target_directory.is_none());
        assert!(!config.export.dry_run);
    }

    #[test]
    fn test_overrides_apply_cli_options() {
        let mut config = LocalizerConfig::default();
        let args = LocalizeArgs {
            non_recursive: true,
            languages: vec!["fr".to_string(), "de".to_string()],
            target_dir: Some("out".to_string()),
            dry_run: true,
            ..args()
        };

        args.apply_overrides(&mut config);

        assert!(!config.templates.recursive);
        assert_eq!(config.export.languages, vec!["fr", "de"]);
        assert_eq!(config.export.target_directory.as_deref(), Some("out"));
        assert!(config.export.dry_run);
    }

    #[test]
    fn test_cli_roots_win_over_config() {
        let mut config = LocalizerConfig::default();
        config.templates.folders = vec!["from-config".to_string()];

        let from_config = args().resolve_roots(&config);
        assert_eq!(from_config, vec!["from-config"]);

        let args = LocalizeArgs {
            roots: vec!["from-cli".to_string()],
            ..args()
        };
        assert_eq!(args.resolve_roots(&config), vec!["from-cli"]);
    }

    #[test]
    fn test_exit_codes() {
        use crate::domain::Outcome;

        assert_eq!(exit_code(&summary(&[Outcome::Succeeded]), false), 0);
        assert_eq!(
            exit_code(&summary(&[Outcome::Succeeded, Outcome::Cancelled]), false),
            0
        );
        assert_eq!(
            exit_code(&summary(&[Outcome::failed("bad"), Outcome::Succeeded]), false),
            1
        );
        assert_eq!(exit_code(&summary(&[Outcome::Cancelled]), true), 130);
    }
}
