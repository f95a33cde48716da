//! Localizer - the build-step entry point
//!
//! Wires discovery, the export coordinator and the reporter together and
//! enforces the fatal preconditions: a root must be given, and it must
//! contain at least one manifest. Everything after dispatch is isolated per
//! manifest and only surfaces through diagnostics and the aggregate flag.

use crate::adapters::exporter::{create_exporter, Exporter};
use crate::config::LocalizerConfig;
use crate::core::discovery::discover_roots;
use crate::core::export::{build_runtime, ExportCoordinator};
use crate::core::report::{DiagnosticSink, LocalizationSummary, Reporter, TracingSink};
use crate::domain::{CancellationSignal, ExportOptions, Result};
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Localizes every template under one or more roots
pub struct Localizer {
    exporter: Arc<dyn Exporter>,
    options: ExportOptions,
    recursive: bool,
    sink: Arc<dyn DiagnosticSink>,
}

impl Localizer {
    /// Create a localizer with default options, recursive discovery and
    /// diagnostics sent to `tracing`
    pub fn new(exporter: Arc<dyn Exporter>) -> Self {
        Self {
            exporter,
            options: ExportOptions::default(),
            recursive: true,
            sink: Arc::new(TracingSink),
        }
    }

    /// Create a localizer from the loaded configuration
    pub fn from_config(config: &LocalizerConfig) -> Self {
        Self::new(create_exporter(&config.exporter))
            .with_options(config.export.to_options())
            .with_recursive(config.templates.recursive)
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Send diagnostics somewhere other than `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Localize every template under `root`, blocking until all exports
    /// have finished
    ///
    /// Returns the aggregate result: `true` when no export failed.
    ///
    /// # Errors
    ///
    /// - [`LocalizeError::Configuration`](crate::domain::LocalizeError::Configuration)
    ///   if `root` is blank
    /// - [`LocalizeError::DiscoveryEmpty`](crate::domain::LocalizeError::DiscoveryEmpty)
    ///   if no manifest is found under it
    /// - [`LocalizeError::Runtime`](crate::domain::LocalizeError::Runtime)
    ///   if called from inside an async runtime; use [`localize`](Self::localize)
    ///   there
    ///
    /// Per-manifest failures are never returned as errors.
    pub fn execute(&self, root: &str) -> Result<bool> {
        self.execute_roots(&[root])
    }

    /// Same as [`execute`](Self::execute) for several roots; manifests are
    /// deduplicated across them
    pub fn execute_roots<P: AsRef<Path>>(&self, roots: &[P]) -> Result<bool> {
        let runtime = build_runtime()?;
        let summary = runtime.block_on(self.localize(roots, CancellationSignal::never()))?;
        Ok(summary.success)
    }

    /// Discover, export and report, returning the full run summary
    ///
    /// Must be awaited inside a runtime. `cancellation` is handed to every
    /// export.
    pub async fn localize<P: AsRef<Path>>(
        &self,
        roots: &[P],
        cancellation: CancellationSignal,
    ) -> Result<LocalizationSummary> {
        let manifests = discover_roots(roots, self.recursive)?;
        tracing::info!(
            count = manifests.len(),
            recursive = self.recursive,
            "Discovered template manifests"
        );

        let coordinator =
            ExportCoordinator::new(self.exporter.clone()).with_options(self.options.clone());
        let started_at = Utc::now();
        let start = Instant::now();
        let outcomes = coordinator.run(manifests, cancellation).await;
        let duration = start.elapsed();

        let summary = Reporter::new(self.sink.clone()).summarize(&outcomes, started_at, duration);
        summary.log_summary();
        Ok(summary)
    }
}
