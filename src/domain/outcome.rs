//! Terminal outcome of one dispatched export

use super::export::Cause;
use std::fmt;

/// Terminal state of one export
///
/// Every dispatched export moves `Pending → Running` and then into exactly
/// one of these variants. There are no transitions out of a terminal state.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The exporter completed and reported success
    Succeeded,

    /// The exporter reported failure, returned an error, or panicked
    Failed {
        /// Human-readable failure message
        message: String,
        /// Underlying error, if any
        cause: Option<Cause>,
    },

    /// The export was cancelled before it completed
    Cancelled,
}

impl Outcome {
    /// Creates a failed outcome without a cause
    pub fn failed(message: impl Into<String>) -> Self {
        Outcome::Failed {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failed outcome from an error, using its display as the message
    pub fn from_fault(cause: Cause) -> Self {
        Outcome::Failed {
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// Short label used in logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Failed { .. } => "failed",
            Outcome::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failed { message, .. } => write!(f, "failed: {message}"),
            other => f.write_str(other.label()),
        }
    }
}

/// True iff no outcome is `Failed`; cancellations do not count against it
pub fn aggregate<'a, I>(outcomes: I) -> bool
where
    I: IntoIterator<Item = &'a Outcome>,
{
    !outcomes.into_iter().any(Outcome::is_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizeError;
    use std::sync::Arc;

    #[test]
    fn test_from_fault_uses_error_display() {
        let outcome = Outcome::from_fault(Arc::new(LocalizeError::Export("boom".to_string())));
        match outcome {
            Outcome::Failed { message, cause } => {
                assert_eq!(message, "Export error: boom");
                assert!(cause.is_some());
            }
            other => panic!("unexpected outcome: {other}"),
        }
    }

    #[test]
    fn test_aggregate_ignores_cancellation() {
        assert!(aggregate(&[Outcome::Succeeded, Outcome::Cancelled]));
        assert!(aggregate(&[Outcome::Cancelled, Outcome::Cancelled]));
        assert!(!aggregate(&[Outcome::Succeeded, Outcome::failed("x")]));
        assert!(aggregate(&Vec::<Outcome>::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Succeeded.to_string(), "succeeded");
        assert_eq!(Outcome::Cancelled.to_string(), "cancelled");
        assert_eq!(Outcome::failed("bad").to_string(), "failed: bad");
    }
}
