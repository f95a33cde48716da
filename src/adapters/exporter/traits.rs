//! Exporter trait definition
//!
//! The exporter reads one manifest and writes its localization files. The
//! orchestrator only depends on this trait, so the real exporter and test
//! doubles are interchangeable.

use crate::domain::{CancellationSignal, ExportOptions, ExportResult, ManifestPath, Result};
use async_trait::async_trait;

/// Performs the localization export of one manifest
///
/// Implementations report an ordinary failure as `Ok` with
/// `succeeded = false`. Returning `Err` means the export faulted; returning
/// [`LocalizeError::Cancelled`](crate::domain::LocalizeError::Cancelled)
/// means it stopped because `cancellation` fired.
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Exports localization files for `manifest`
    ///
    /// # Errors
    ///
    /// Returns an error if the export could not be carried out at all.
    async fn export(
        &self,
        manifest: &ManifestPath,
        options: &ExportOptions,
        cancellation: CancellationSignal,
    ) -> Result<ExportResult>;
}
