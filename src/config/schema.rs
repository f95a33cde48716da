//! Configuration schema types
//!
//! This module defines the configuration structure mapped from the TOML file.
//! Every section has defaults, so an empty file (or no file) yields the
//! default build-step behavior: recursive discovery and an English-only,
//! non-dry-run export.

use crate::domain::{ExportOptions, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where to look for template manifests
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Options passed to every export
    #[serde(default)]
    pub export: ExportConfig,

    /// External program performing the export
    #[serde(default)]
    pub exporter: ExporterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LocalizerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.templates.validate()?;
        self.export.validate()?;
        self.exporter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Template discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Roots to search; each may be a directory or a single manifest file
    #[serde(default)]
    pub folders: Vec<String>,

    /// Walk the whole subtree of each directory root
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl TemplatesConfig {
    fn validate(&self) -> Result<(), String> {
        if self.folders.iter().any(|f| f.trim().is_empty()) {
            return Err("templates.folders must not contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            recursive: true,
        }
    }
}

/// Export options applied to every manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Dry run mode (exporter reports without writing)
    #[serde(default)]
    pub dry_run: bool,

    /// Override for the directory localization files are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_directory: Option<String>,

    /// Languages to export
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Cancel in-flight exports on Ctrl+C / SIGTERM (CLI only)
    #[serde(default = "default_true")]
    pub cancel_on_interrupt: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.languages.is_empty() {
            return Err("export.languages must contain at least one language".to_string());
        }
        if self.languages.iter().any(|l| l.trim().is_empty()) {
            return Err("export.languages must not contain empty entries".to_string());
        }
        if let Some(dir) = &self.target_directory {
            if dir.trim().is_empty() {
                return Err("export.target_directory must not be empty when set".to_string());
            }
        }
        Ok(())
    }

    /// Builds the options handed to the exporter
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions::new(
            self.dry_run,
            self.target_directory.clone(),
            self.languages.clone(),
        )
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            target_directory: None,
            languages: default_languages(),
            cancel_on_interrupt: true,
        }
    }
}

/// External exporter program
///
/// `args` may contain the placeholders `{manifest}`, `{languages}`,
/// `{target_dir}` and `{dry_run}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Program to run once per manifest
    #[serde(default = "default_exporter_program")]
    pub program: String,

    /// Arguments, with placeholders expanded per manifest
    #[serde(default = "default_exporter_args")]
    pub args: Vec<String>,

    /// Working directory for the program; inherited when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

impl ExporterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("exporter.program cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            program: default_exporter_program(),
            args: default_exporter_args(),
            working_directory: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_languages() -> Vec<String> {
    vec![DEFAULT_LANGUAGE.to_string()]
}

fn default_exporter_program() -> String {
    "dotnet".to_string()
}

fn default_exporter_args() -> Vec<String> {
    vec![
        "template-localizer".to_string(),
        "export".to_string(),
        "{manifest}".to_string(),
        "--language".to_string(),
        "{languages}".to_string(),
    ]
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
