//! Reporter - one diagnostic per outcome and the aggregate result

use super::sink::{Diagnostic, DiagnosticSink, Severity};
use super::summary::LocalizationSummary;
use crate::domain::{aggregate, Cause, ManifestPath, Outcome};
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

/// Turns outcomes into diagnostics and the batch success flag
pub struct Reporter {
    sink: Arc<dyn DiagnosticSink>,
}

impl Reporter {
    /// Create a reporter writing to `sink`
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Emit one diagnostic per outcome, in the given order, and return
    /// whether the batch succeeded
    ///
    /// The batch succeeds when no outcome is `Failed`; cancelled exports do
    /// not count against it. Individual failures are only ever reported,
    /// never raised.
    pub fn report(&self, outcomes: &[(ManifestPath, Outcome)]) -> bool {
        for (manifest, outcome) in outcomes {
            self.sink.emit(&diagnose(manifest, outcome));
        }
        aggregate(outcomes.iter().map(|(_, outcome)| outcome))
    }

    /// Report every outcome and build the run summary from them
    pub fn summarize(
        &self,
        outcomes: &[(ManifestPath, Outcome)],
        started_at: DateTime<Utc>,
        duration: Duration,
    ) -> LocalizationSummary {
        let diagnostics: Vec<Diagnostic> = outcomes
            .iter()
            .map(|(manifest, outcome)| diagnose(manifest, outcome))
            .collect();
        for diagnostic in &diagnostics {
            self.sink.emit(diagnostic);
        }
        LocalizationSummary::from_outcomes(outcomes, diagnostics, started_at, duration)
    }
}

/// Builds the diagnostic for one outcome
pub fn diagnose(manifest: &ManifestPath, outcome: &Outcome) -> Diagnostic {
    match outcome {
        Outcome::Succeeded => Diagnostic::new(
            Severity::Info,
            format!("Template file {manifest} was successfully localized."),
            manifest.clone(),
        ),
        Outcome::Cancelled => Diagnostic::new(
            Severity::Warning,
            format!("The export was cancelled: {manifest}"),
            manifest.clone(),
        ),
        Outcome::Failed {
            message,
            cause: None,
        } => Diagnostic::new(
            Severity::Error,
            format!("Failed to localize {manifest}: {message}."),
            manifest.clone(),
        ),
        Outcome::Failed {
            cause: Some(cause), ..
        } => Diagnostic::new(
            Severity::Error,
            format!("{manifest}: {}", render_cause(cause)),
            manifest.clone(),
        ),
    }
}

/// Renders an error followed by its source chain
fn render_cause(cause: &Cause) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        rendered.push_str(": ");
        rendered.push_str(&err.to_string());
        source = err.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::sink::MemorySink;
    use crate::domain::LocalizeError;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        inner: std::io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not write resources")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.inner)
        }
    }

    fn manifest(name: &str) -> ManifestPath {
        ManifestPath::new(format!("{name}/.template.config/template.json"))
    }

    fn reporter() -> (Reporter, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Reporter::new(sink.clone()), sink)
    }

    #[test]
    fn test_success_is_info() {
        let diagnostic = diagnose(&manifest("a"), &Outcome::Succeeded);
        assert_eq!(diagnostic.severity, Severity::Info);
        assert_eq!(
            diagnostic.message,
            "Template file a/.template.config/template.json was successfully localized."
        );
    }

    #[test]
    fn test_cancelled_is_warning_naming_path() {
        let diagnostic = diagnose(&manifest("a"), &Outcome::Cancelled);
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert!(diagnostic
            .message
            .contains("a/.template.config/template.json"));
    }

    #[test]
    fn test_failure_without_cause_uses_message() {
        let diagnostic = diagnose(&manifest("a"), &Outcome::failed("no strings found"));
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "Failed to localize a/.template.config/template.json: no strings found."
        );
    }

    #[test]
    fn test_failure_with_cause_prefers_cause_chain() {
        let cause: Cause = Arc::new(Wrapped {
            inner: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        });
        let outcome = Outcome::Failed {
            message: "bare message".to_string(),
            cause: Some(cause),
        };

        let diagnostic = diagnose(&manifest("a"), &outcome);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "a/.template.config/template.json: could not write resources: read-only"
        );
        assert!(!diagnostic.message.contains("bare message"));
    }

    #[test]
    fn test_one_fault_fails_the_batch() {
        let (reporter, sink) = reporter();
        let outcomes = vec![
            (manifest("a"), Outcome::Succeeded),
            (
                manifest("b"),
                Outcome::from_fault(Arc::new(LocalizeError::Export("boom".to_string()))),
            ),
            (manifest("c"), Outcome::Succeeded),
        ];

        assert!(!reporter.report(&outcomes));

        let diagnostics = sink.diagnostics();
        let severities: Vec<Severity> = diagnostics.iter().map(|d| d.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Error, Severity::Info]
        );
        let order: Vec<&ManifestPath> = diagnostics.iter().map(|d| &d.manifest).collect();
        assert_eq!(order, vec![&outcomes[0].0, &outcomes[1].0, &outcomes[2].0]);
    }

    #[test]
    fn test_all_cancelled_still_succeeds() {
        let (reporter, sink) = reporter();
        let outcomes: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|n| (manifest(n), Outcome::Cancelled))
            .collect();

        assert!(reporter.report(&outcomes));

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_summarize_emits_and_collects() {
        let (reporter, sink) = reporter();
        let outcomes = vec![
            (manifest("a"), Outcome::Succeeded),
            (manifest("b"), Outcome::Cancelled),
        ];

        let summary = reporter.summarize(&outcomes, Utc::now(), Duration::from_millis(5));

        assert!(summary.success);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.diagnostics, sink.diagnostics());
    }

    #[test]
    fn test_reported_failure_fails_the_batch() {
        let (reporter, _sink) = reporter();
        let outcomes = vec![
            (manifest("a"), Outcome::Cancelled),
            (manifest("b"), Outcome::failed("invalid manifest")),
        ];
        assert!(!reporter.report(&outcomes));
    }
}
