//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LocalizerConfig;
use crate::domain::errors::LocalizeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Environment variable naming a single template root, used when neither the
/// command line nor the configuration file names one
pub const TEMPLATE_FOLDER_ENV: &str = "TLOC_TEMPLATE_FOLDER";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LocalizerConfig
/// 4. Applies environment variable overrides (TLOC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, if a
/// referenced environment variable is missing, or if validation fails.
///
/// # Examples
///
/// ```no_run
/// use template_localizer::config::loader::load_config;
///
/// let config = load_config("template-localizer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LocalizerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LocalizeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LocalizeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LocalizerConfig = toml::from_str(&contents)
        .map_err(|e| LocalizeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LocalizeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the configuration file if it exists, defaults otherwise
///
/// Environment overrides and validation apply in both cases. An explicitly
/// requested file that does not exist is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>, explicit: bool) -> Result<LocalizerConfig> {
    let path = path.as_ref();
    if explicit || path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "No configuration file found, using defaults"
    );

    let mut config = LocalizerConfig::default();
    apply_env_overrides(&mut config);
    config.validate().map_err(|e| {
        LocalizeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LocalizeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the TLOC_* prefix
fn apply_env_overrides(config: &mut LocalizerConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Applies overrides read through `lookup`
///
/// Unparseable boolean values leave the setting unchanged.
fn apply_overrides<F>(config: &mut LocalizerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let flag = |key: &str| lookup(key).and_then(|v| v.trim().parse::<bool>().ok());

    if let Some(val) = lookup("TLOC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Templates overrides
    if config.templates.folders.is_empty() {
        if let Some(val) = lookup(TEMPLATE_FOLDER_ENV) {
            config.templates.folders = vec![val];
        }
    }
    if let Some(recursive) = flag("TLOC_TEMPLATES_RECURSIVE") {
        config.templates.recursive = recursive;
    }

    // Export overrides
    if let Some(dry_run) = flag("TLOC_EXPORT_DRY_RUN") {
        config.export.dry_run = dry_run;
    }
    if let Some(val) = lookup("TLOC_EXPORT_LANGUAGES") {
        config.export.languages = split_list(&val);
    }
    if let Some(val) = lookup("TLOC_EXPORT_TARGET_DIRECTORY") {
        config.export.target_directory = Some(val);
    }

    // Exporter overrides
    if let Some(val) = lookup("TLOC_EXPORTER_PROGRAM") {
        config.exporter.program = val;
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
