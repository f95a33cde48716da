//! Diagnostic sinks
//!
//! The reporter writes to an injected [`DiagnosticSink`] rather than a global
//! logger, so the same report can go to `tracing`, be collected in memory for
//! a JSON summary, or be inspected by tests.

use crate::domain::ManifestPath;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// One message about one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub manifest: ManifestPath,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, manifest: ManifestPath) -> Self {
        Self {
            severity,
            message: message.into(),
            manifest,
        }
    }
}

/// Receives diagnostics emitted by the reporter
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at the matching level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let manifest = &diagnostic.manifest;
        match diagnostic.severity {
            Severity::Info => tracing::info!(manifest = %manifest, "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(manifest = %manifest, "{}", diagnostic.message),
            Severity::Error => tracing::error!(manifest = %manifest, "{}", diagnostic.message),
        }
    }
}

/// Keeps every diagnostic in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Removes and returns everything collected so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned lock still holds complete diagnostics.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

/// Sends every diagnostic to each of several sinks
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sinks }
    }
}

impl DiagnosticSink for FanoutSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        for sink in &self.sinks {
            sink.emit(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(severity: Severity) -> Diagnostic {
        Diagnostic::new(severity, "message", ManifestPath::new("template.json"))
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        sink.emit(&diagnostic(Severity::Info));
        sink.emit(&diagnostic(Severity::Error));

        let collected = sink.diagnostics();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].severity, Severity::Info);
        assert_eq!(collected[1].severity, Severity::Error);

        assert_eq!(sink.take().len(), 2);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_fanout_sink_forwards_to_all() {
        let first = Arc::new(MemorySink::new());
        let second = Arc::new(MemorySink::new());
        let sinks: Vec<Arc<dyn DiagnosticSink>> = vec![
            first.clone() as Arc<dyn DiagnosticSink>,
            second.clone() as Arc<dyn DiagnosticSink>,
            Arc::new(TracingSink) as Arc<dyn DiagnosticSink>,
        ];
        let fanout = FanoutSink::new(sinks);

        fanout.emit(&diagnostic(Severity::Warning));

        assert_eq!(first.diagnostics().len(), 1);
        assert_eq!(second.diagnostics().len(), 1);
    }

    #[test]
    fn test_diagnostic_serialization() {
        let json = serde_json::to_value(diagnostic(Severity::Warning)).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["message"], "message");
        assert_eq!(json["manifest"], "template.json");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
