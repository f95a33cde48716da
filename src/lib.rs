// Template Localizer - Build-step localization of code templates
// Copyright (c) 2025 Template Localizer Contributors
// Licensed under the MIT License

//! # Template Localizer
//!
//! A build-step tool that finds every code-template manifest (`template.json`)
//! under a folder and exports localization files for each one, all at once.
//!
//! ## Overview
//!
//! This library provides:
//! - **Discovering** manifests, either directly at a path or under
//!   `.template.config` directories anywhere below it
//! - **Exporting** every manifest concurrently through an [`Exporter`](adapters::exporter::Exporter)
//! - **Reporting** one diagnostic per manifest and a single aggregate result
//!
//! A failing export never stops its siblings. Only two conditions abort a
//! run, both before anything is dispatched: no template folder was given, or
//! the folder holds no manifests.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Discovery, export coordination and reporting
//! - [`adapters`] - The external exporter integration
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use template_localizer::config::LocalizerConfig;
//! use template_localizer::core::Localizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let localizer = Localizer::from_config(&LocalizerConfig::default());
//!
//!     let success = localizer.execute("src/templates")?;
//!     std::process::exit(if success { 0 } else { 1 });
//! }
//! ```
//!
//! ## Custom Exporters
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use std::sync::Arc;
//! use template_localizer::adapters::exporter::Exporter;
//! use template_localizer::core::Localizer;
//! use template_localizer::domain::{
//!     CancellationSignal, ExportOptions, ExportResult, ManifestPath, Result,
//! };
//!
//! struct Noop;
//!
//! #[async_trait]
//! impl Exporter for Noop {
//!     async fn export(
//!         &self,
//!         manifest: &ManifestPath,
//!         _options: &ExportOptions,
//!         _cancellation: CancellationSignal,
//!     ) -> Result<ExportResult> {
//!         Ok(ExportResult::success(manifest.clone()))
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let success = Localizer::new(Arc::new(Noop)).execute("templates")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type is
//! [`domain::LocalizeError`]. Per-manifest export failures are not errors:
//! they surface as diagnostics and in the aggregate result.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
