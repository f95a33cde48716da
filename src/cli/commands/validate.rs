//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// The file must exist; loading already validates it.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Template Folders: {}",
            if config.templates.folders.is_empty() {
                "(none)".to_string()
            } else {
                config.templates.folders.join(", ")
            }
        );
        println!("  Recursive: {}", config.templates.recursive);
        println!("  Languages: {}", config.export.languages.join(", "));
        println!(
            "  Target Directory: {}",
            config
                .export
                .target_directory
                .as_deref()
                .unwrap_or("(exporter default)")
        );
        println!("  Dry Run: {}", config.export.dry_run);
        println!(
            "  Exporter: {} {}",
            config.exporter.program,
            config.exporter.args.join(" ")
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}
