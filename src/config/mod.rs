//! Configuration management.
//!
//! The localizer reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `TLOC_*` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use template_localizer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("template-localizer.toml")?;
//! println!("Roots: {:?}", config.templates.folders);
//! println!("Languages: {:?}", config.export.languages);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`TemplatesConfig`] - Roots to discover manifests under
//! - [`ExportConfig`] - Options passed to every export
//! - [`ExporterConfig`] - External program that performs each export
//! - [`LoggingConfig`] - Optional rolling file logs
//!
//! # Example Configuration
//!
//! ```toml
//! [templates]
//! folders = ["templates"]
//! recursive = true
//!
//! [export]
//! languages = ["en"]
//!
//! [exporter]
//! program = "dotnet"
//! args = ["template-localizer", "export", "{manifest}", "--language", "{languages}"]
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default, split_list, TEMPLATE_FOLDER_ENV};
pub use schema::{
    ApplicationConfig, ExportConfig, ExporterConfig, LocalizerConfig, LoggingConfig,
    TemplatesConfig,
};
