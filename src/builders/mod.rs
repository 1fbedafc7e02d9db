//! Builders
//!
//! Fluent builders for Gab client configuration.

pub mod config;

pub use config::*;
