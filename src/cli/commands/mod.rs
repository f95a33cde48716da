//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod discover;
pub mod init;
pub mod localize;
pub mod validate;
