//! Export coordinator - concurrent fan-out and join of manifest exports
//!
//! Every manifest gets its own task, dispatched immediately; there is no pool
//! and no queue. The coordinator then waits for every task and inspects each
//! one's terminal state on its own, so a failing, panicking or cancelled
//! export never hides the outcome of its siblings. Outcomes are returned in
//! dispatch order regardless of completion order.
//!
//! No timeout is applied: an export that never completes holds up the batch.
//! Dropping the batch future aborts every export still in flight.

use crate::adapters::exporter::Exporter;
use crate::domain::{
    CancellationSignal, ExportOptions, ExportRequest, ExportResult, LocalizeError, ManifestPath,
    Outcome, Result,
};
use crate::{log_export_outcome, log_export_start};
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::{Handle, Runtime};
use tokio::task::{JoinError, JoinHandle};

/// Dispatches one export per manifest and collects every outcome
pub struct ExportCoordinator {
    exporter: Arc<dyn Exporter>,
    options: ExportOptions,
}

impl ExportCoordinator {
    /// Create a coordinator using the default export options
    pub fn new(exporter: Arc<dyn Exporter>) -> Self {
        Self {
            exporter,
            options: ExportOptions::default(),
        }
    }

    /// Replace the options sent with every export request
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export every manifest concurrently and wait for all of them
    ///
    /// The returned vector has one entry per input manifest, in input order.
    /// `cancellation` is handed to every export; once it fires, exports that
    /// have not completed resolve to [`Outcome::Cancelled`].
    pub async fn run(
        &self,
        manifests: Vec<ManifestPath>,
        cancellation: CancellationSignal,
    ) -> Vec<(ManifestPath, Outcome)> {
        tracing::info!(
            count = manifests.len(),
            languages = ?self.options.languages,
            dry_run = self.options.dry_run,
            "Dispatching exports"
        );

        let mut dispatched = Vec::with_capacity(manifests.len());
        let mut handles = Vec::with_capacity(manifests.len());
        for (index, manifest) in manifests.into_iter().enumerate() {
            log_export_start!(&manifest, index);
            let request = ExportRequest::new(manifest.clone(), self.options.clone());
            handles.push(AbortOnDrop(tokio::spawn(run_export(
                self.exporter.clone(),
                request,
                cancellation.clone(),
            ))));
            dispatched.push(manifest);
        }

        // Waits for all handles; a failed one does not short-circuit the rest.
        let joined = futures::future::join_all(handles).await;

        dispatched
            .into_iter()
            .zip(joined)
            .map(|(manifest, joined)| {
                let outcome = match joined {
                    Ok(outcome) => outcome,
                    Err(e) => join_error_outcome(e),
                };
                log_export_outcome!(&manifest, &outcome);
                (manifest, outcome)
            })
            .collect()
    }

    /// Synchronous boundary: run the whole batch on a fresh runtime
    ///
    /// Blocks the calling thread until every export has reached a terminal
    /// state. Inside an async runtime, await [`run`](Self::run) instead.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizeError::Runtime`] if called from inside an async
    /// runtime or if the runtime cannot be created. No export is started in
    /// either case.
    pub fn run_blocking(&self, manifests: Vec<ManifestPath>) -> Result<Vec<(ManifestPath, Outcome)>> {
        let runtime = build_runtime()?;
        Ok(runtime.block_on(self.run(manifests, CancellationSignal::never())))
    }
}

/// Builds the multi-threaded runtime used at synchronous boundaries
///
/// # Errors
///
/// Fails with [`LocalizeError::Runtime`] when the calling thread is already
/// inside a runtime.
pub fn build_runtime() -> Result<Runtime> {
    if Handle::try_current().is_ok() {
        return Err(LocalizeError::Runtime(
            "Cannot block on exports from inside an async runtime; await the async entry point instead"
                .to_string(),
        ));
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("template-localizer")
        .build()
        .map_err(|e| LocalizeError::Runtime(format!("Failed to start async runtime: {e}")))
}

/// Join handle that aborts its task when dropped
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl<T> Future for AbortOnDrop<T> {
    type Output = std::result::Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

/// Body of one dispatched task: `Running` until a terminal outcome
async fn run_export(
    exporter: Arc<dyn Exporter>,
    request: ExportRequest,
    mut cancellation: CancellationSignal,
) -> Outcome {
    if cancellation.is_cancelled() {
        return Outcome::Cancelled;
    }

    let ExportRequest { manifest, options } = request;
    let export = exporter.export(&manifest, &options, cancellation.clone());

    tokio::select! {
        biased;
        result = export => export_outcome(&manifest, result),
        _ = cancellation.cancelled() => Outcome::Cancelled,
    }
}

/// Maps what the exporter returned to a terminal outcome
fn export_outcome(manifest: &ManifestPath, result: Result<ExportResult>) -> Outcome {
    match result {
        Ok(result) if result.succeeded => Outcome::Succeeded,
        Ok(result) => Outcome::Failed {
            message: result
                .error_message
                .unwrap_or_else(|| format!("Failed to localize {manifest}")),
            cause: result.inner_cause,
        },
        Err(LocalizeError::Cancelled) => Outcome::Cancelled,
        Err(e) => Outcome::from_fault(Arc::new(e)),
    }
}

/// Maps a task that did not return normally to a terminal outcome
fn join_error_outcome(error: JoinError) -> Outcome {
    if error.is_cancelled() {
        return Outcome::Cancelled;
    }

    let message = match error.try_into_panic() {
        Ok(payload) => panic_message(payload.as_ref()),
        Err(other) => other.to_string(),
    };
    Outcome::from_fault(Arc::new(LocalizeError::Export(format!(
        "exporter panicked: {message}"
    ))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
