//! Cancellation signal threaded through every export
//!
//! Built on a `tokio::sync::watch` channel carrying `bool`, the same shape as
//! the shutdown channel the binary wires to Ctrl+C. `true` means cancel.

use tokio::sync::watch;

/// Sending half; requests cancellation of every export holding a signal
#[derive(Debug)]
pub struct CancellationSource {
    tx: watch::Sender<bool>,
}

impl CancellationSource {
    /// Creates a source whose signals start out not cancelled
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Returns a signal observing this source
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Requests cancellation
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to each export
///
/// A signal whose source has been dropped can never become cancelled.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    rx: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// A signal that is never cancelled
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested
    ///
    /// Pends forever if the source is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        let closed = self.rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

impl From<watch::Receiver<bool>> for CancellationSignal {
    fn from(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }
}
