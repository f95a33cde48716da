//! Export orchestration
//!
//! This module fans out one export per manifest and joins them all:
//! - [`ExportCoordinator`] - unbounded concurrent dispatch and order-preserving join
//! - [`build_runtime`] - runtime used wherever a synchronous boundary is needed

pub mod coordinator;

pub use coordinator::{build_runtime, ExportCoordinator};
