//! Localization exporter adapter
//!
//! - [`Exporter`] - the collaborator trait the orchestrator dispatches against
//! - [`CommandExporter`] - runs an external program per manifest

pub mod command;
pub mod traits;

pub use command::CommandExporter;
pub use traits::Exporter;

use crate::config::ExporterConfig;
use std::sync::Arc;

/// Creates the exporter described by the configuration
pub fn create_exporter(config: &ExporterConfig) -> Arc<dyn Exporter> {
    tracing::debug!(program = %config.program, "Using command exporter");
    Arc::new(CommandExporter::new(config.clone()))
}
