//! Logging and observability
//!
//! This module provides structured logging with:
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Human-readable console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use template_localizer::logging::init_logging;
//! use template_localizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the dispatch of one export
///
/// # Example
///
/// ```no_run
/// use template_localizer::log_export_start;
/// use template_localizer::domain::ManifestPath;
///
/// let manifest = ManifestPath::new("a/.template.config/template.json");
/// log_export_start!(&manifest, 0);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($manifest:expr, $index:expr) => {
        tracing::debug!(
            manifest = %$manifest,
            index = $index,
            "Dispatching export"
        );
    };
}

/// Log the terminal outcome of one export
///
/// # Example
///
/// ```no_run
/// use template_localizer::log_export_outcome;
/// use template_localizer::domain::{ManifestPath, Outcome};
///
/// let manifest = ManifestPath::new("a/.template.config/template.json");
/// log_export_outcome!(&manifest, &Outcome::Succeeded);
/// ```
#[macro_export]
macro_rules! log_export_outcome {
    ($manifest:expr, $outcome:expr) => {
        tracing::debug!(
            manifest = %$manifest,
            outcome = $outcome.label(),
            "Export reached terminal state"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use template_localizer::log_error_with_context;
/// use template_localizer::domain::LocalizeError;
///
/// let error = LocalizeError::Configuration("template folder is not set".to_string());
/// log_error_with_context!(&error, "Localization aborted");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
