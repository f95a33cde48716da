//! Localization summary and reporting
//!
//! Counts per outcome, timing, the aggregate result, and the diagnostics
//! emitted for the run. Serializable for the `--report` JSON file.

use super::sink::Diagnostic;
use crate::domain::{aggregate, ManifestPath, Outcome, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Summary of one localization run
#[derive(Debug, Clone, Serialize)]
pub struct LocalizationSummary {
    /// When dispatch started
    pub started_at: DateTime<Utc>,

    /// Wall-clock time from dispatch to the last terminal outcome
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,

    /// Number of dispatched exports
    pub total: usize,

    pub succeeded: usize,

    pub failed: usize,

    pub cancelled: usize,

    /// True iff no export failed
    pub success: bool,

    /// Diagnostics in discovery order
    pub diagnostics: Vec<Diagnostic>,
}

impl LocalizationSummary {
    /// Builds the summary for a completed batch
    pub fn from_outcomes(
        outcomes: &[(ManifestPath, Outcome)],
        diagnostics: Vec<Diagnostic>,
        started_at: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        let mut succeeded = 0;
        let mut failed = 0;
        let mut cancelled = 0;
        for (_, outcome) in outcomes {
            match outcome {
                Outcome::Succeeded => succeeded += 1,
                Outcome::Failed { .. } => failed += 1,
                Outcome::Cancelled => cancelled += 1,
            }
        }

        Self {
            started_at,
            duration,
            total: outcomes.len(),
            succeeded,
            failed,
            cancelled,
            success: aggregate(outcomes.iter().map(|(_, outcome)| outcome)),
            diagnostics,
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            succeeded = self.succeeded,
            failed = self.failed,
            cancelled = self.cancelled,
            duration_ms = self.duration.as_millis() as u64,
            success = self.success,
            "Localization completed"
        );
    }

    /// Write the summary as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Wrote localization report");
        Ok(())
    }
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::sink::Severity;
    use tempfile::TempDir;

    fn outcomes() -> Vec<(ManifestPath, Outcome)> {
        vec![
            (ManifestPath::new("a"), Outcome::Succeeded),
            (ManifestPath::new("b"), Outcome::failed("bad")),
            (ManifestPath::new("c"), Outcome::Cancelled),
            (ManifestPath::new("d"), Outcome::Succeeded),
        ]
    }

    #[test]
    fn test_counts_and_success() {
        let summary = LocalizationSummary::from_outcomes(
            &outcomes(),
            Vec::new(),
            Utc::now(),
            Duration::from_millis(1500),
        );

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.cancelled, 1);
        assert!(!summary.success);
    }

    #[test]
    fn test_cancelled_only_is_success() {
        let outcomes = vec![(ManifestPath::new("a"), Outcome::Cancelled)];
        let summary =
            LocalizationSummary::from_outcomes(&outcomes, Vec::new(), Utc::now(), Duration::ZERO);
        assert!(summary.success);
        assert_eq!(summary.cancelled, 1);
    }

    #[test]
    fn test_write_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/localize.json");
        let diagnostics = vec![Diagnostic::new(
            Severity::Error,
            "Failed to localize b: bad.",
            ManifestPath::new("b"),
        )];
        let summary = LocalizationSummary::from_outcomes(
            &outcomes(),
            diagnostics,
            Utc::now(),
            Duration::from_millis(1500),
        );

        summary.write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["duration_ms"], 1500);
        assert_eq!(written["failed"], 1);
        assert_eq!(written["success"], false);
        assert_eq!(written["diagnostics"][0]["severity"], "error");
        assert_eq!(written["diagnostics"][0]["manifest"], "b");
    }
}
