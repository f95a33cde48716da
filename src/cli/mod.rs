//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "template-localizer.toml";

/// Template Localizer - export localization files for code templates
#[derive(Parser, Debug)]
#[command(name = "template-localizer")]
#[command(version, about, long_about = None)]
#[command(author = "Template Localizer Contributors")]
pub struct Cli {
    /// Path to configuration file [default: template-localizer.toml]
    #[arg(short, long, env = "TLOC_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TLOC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration path to load
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)
    }

    /// Whether the configuration file was named explicitly, in which case it
    /// must exist
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export localization files for every template under the given folders
    Localize(commands::localize::LocalizeArgs),

    /// List the template manifests found under a folder
    Discover(commands::discover::DiscoverArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_localize() {
        let cli = Cli::parse_from(["template-localizer", "localize"]);
        assert_eq!(cli.config_path(), DEFAULT_CONFIG_PATH);
        assert!(!cli.config_is_explicit());
        assert!(matches!(cli.command, Commands::Localize(_)));
    }

    #[test]
    fn test_cli_parse_localize_options() {
        let cli = Cli::parse_from([
            "template-localizer",
            "localize",
            "templates",
            "more/templates",
            "--non-recursive",
            "--language",
            "fr",
            "--language",
            "de",
            "--target-dir",
            "out",
            "--dry-run",
            "--report",
            "report.json",
        ]);

        let Commands::Localize(args) = cli.command else {
            panic!("expected localize command");
        };
        assert_eq!(args.roots, vec!["templates", "more/templates"]);
        assert!(args.non_recursive);
        assert_eq!(args.languages, vec!["fr", "de"]);
        assert_eq!(args.target_dir.as_deref(), Some("out"));
        assert!(args.dry_run);
        assert_eq!(
            args.report.as_deref(),
            Some(std::path::Path::new("report.json"))
        );
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["template-localizer", "--config", "custom.toml", "localize"]);
        assert_eq!(cli.config_path(), "custom.toml");
        assert!(cli.config_is_explicit());
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["template-localizer", "--log-level", "debug", "localize"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_discover() {
        let cli = Cli::parse_from(["template-localizer", "discover", "templates", "--non-recursive"]);
        let Commands::Discover(args) = cli.command else {
            panic!("expected discover command");
        };
        assert_eq!(args.root, "templates");
        assert!(args.non_recursive);
    }

    #[test]
    fn test_cli_discover_requires_root() {
        assert!(Cli::try_parse_from(["template-localizer", "discover"]).is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["template-localizer", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["template-localizer", "init", "--force"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(args.output, DEFAULT_CONFIG_PATH);
        assert!(args.force);
    }
}
