//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Manifest paths** ([`ManifestPath`]) naming each localization target
//! - **Export boundary types** ([`ExportOptions`], [`ExportRequest`], [`ExportResult`])
//! - **Outcomes** ([`Outcome`]) and the aggregate success rule ([`aggregate`])
//! - **Cancellation** ([`CancellationSource`], [`CancellationSignal`]) threaded to every export
//! - **Error types** ([`LocalizeError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, LocalizeError>`]:
//!
//! ```rust
//! use template_localizer::domain::{LocalizeError, Result};
//!
//! fn require_root(root: &str) -> Result<&str> {
//!     if root.trim().is_empty() {
//!         return Err(LocalizeError::Configuration(
//!             "template folder is not set".to_string(),
//!         ));
//!     }
//!     Ok(root)
//! }
//!
//! assert!(require_root("").is_err());
//! ```

pub mod cancel;
pub mod errors;
pub mod export;
pub mod manifest;
pub mod outcome;
pub mod result;

pub use cancel::{CancellationSignal, CancellationSource};
pub use errors::LocalizeError;
pub use export::{Cause, ExportOptions, ExportRequest, ExportResult, DEFAULT_LANGUAGE};
pub use manifest::{ManifestPath, CONFIG_DIR_NAME, MANIFEST_FILE_NAME};
pub use outcome::{aggregate, Outcome};
pub use result::Result;
