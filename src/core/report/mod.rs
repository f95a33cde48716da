//! Outcome reporting
//!
//! - [`Reporter`] - one diagnostic per outcome plus the aggregate result
//! - [`DiagnosticSink`] and its implementations - where diagnostics go
//! - [`LocalizationSummary`] - counts, timing and the JSON report

pub mod reporter;
pub mod sink;
pub mod summary;

pub use reporter::{diagnose, Reporter};
pub use sink::{Diagnostic, DiagnosticSink, FanoutSink, MemorySink, Severity, TracingSink};
pub use summary::LocalizationSummary;
