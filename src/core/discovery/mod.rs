//! Template manifest discovery
//!
//! A manifest is a `template.json` file. Under recursive search only those
//! sitting directly in a `.template.config` directory count as localization
//! targets.

pub mod discoverer;

pub use discoverer::{discover, discover_roots};
