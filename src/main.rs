// Template Localizer - Build-step localization of code templates
// Copyright (c) 2025 Template Localizer Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use template_localizer::cli::{Cli, Commands};
use template_localizer::config::{load_config_or_default, LoggingConfig};
use template_localizer::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; a broken
    // file is reported again by the command itself.
    let loaded = load_config_or_default(cli.config_path(), cli.config_is_explicit()).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = loaded.map(|c| c.logging).unwrap_or_else(LoggingConfig::default);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Template Localizer"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Localize(args) => args.execute(cli.config_path(), cli.config_is_explicit()),
        Commands::Discover(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(cli.config_path()),
        Commands::Init(args) => args.execute(),
    }
}
