//! External system integrations.
//!
//! - [`exporter`] - The localization exporter collaborator (trait-based)
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the core can be
//! tested with in-memory implementations.
//!
//! ```rust,no_run
//! use template_localizer::adapters::exporter::{create_exporter, Exporter};
//! use template_localizer::config::ExporterConfig;
//! use template_localizer::domain::{CancellationSignal, ExportOptions, ManifestPath};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = create_exporter(&ExporterConfig::default());
//! let result = exporter
//!     .export(
//!         &ManifestPath::new("templates/app/.template.config/template.json"),
//!         &ExportOptions::default(),
//!         CancellationSignal::never(),
//!     )
//!     .await?;
//! println!("succeeded: {}", result.succeeded);
//! # Ok(())
//! # }
//! ```

pub mod exporter;
