//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Template Localizer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set templates.folders in {}", self.output);
                println!("  2. Point exporter.program at your localization tool");
                println!("  3. Validate configuration: template-localizer validate-config");
                println!("  4. Run: template-localizer localize");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every setting and its default
    fn generate_config() -> String {
        r#"# Template Localizer Configuration File

[application]
# Log level: trace | debug | info | warn | error
log_level = "info"

[templates]
# Folders (or template.json files) to localize. Used when none are given on
# the command line. Falls back to TLOC_TEMPLATE_FOLDER when empty.
folders = ["templates"]

# Search below each folder for .template.config/template.json
recursive = true

[export]
# Let the exporter report without writing files
dry_run = false

# Directory for localization files (exporter default when unset)
# target_directory = "localize"

languages = ["en"]

# Cancel pending exports on Ctrl+C / SIGTERM
cancel_on_interrupt = true

[exporter]
# Program run once per template. Placeholders in args:
#   {manifest}    path to template.json
#   {languages}   comma-separated languages
#   {target_dir}  target directory (argument dropped when unset)
#   {dry_run}     "true" or "false"
program = "dotnet"
args = ["template-localizer", "export", "{manifest}", "--language", "{languages}"]
# working_directory = "."

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
