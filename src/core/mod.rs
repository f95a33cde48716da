//! Core logic for template localization.
//!
//! # Modules
//!
//! - [`discovery`] - Finding `template.json` manifests under a root
//! - [`export`] - Concurrent dispatch of one export per manifest
//! - [`report`] - Diagnostics, aggregate result and run summary
//! - [`localizer`] - The entry point wiring the three together
//!
//! # Workflow
//!
//! 1. **Discover**: Resolve each root to its manifests, in a stable order
//! 2. **Check**: Fail before dispatch if no root is set or nothing was found
//! 3. **Export**: Start every export at once and wait for all of them
//! 4. **Report**: One diagnostic per manifest, then the aggregate result
//!
//! # Example
//!
//! ```rust,no_run
//! use template_localizer::config::load_config;
//! use template_localizer::core::localizer::Localizer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("template-localizer.toml")?;
//! let localizer = Localizer::from_config(&config);
//!
//! if !localizer.execute("templates")? {
//!     eprintln!("Some templates could not be localized");
//! }
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod export;
pub mod localizer;
pub mod report;

pub use localizer::Localizer;
