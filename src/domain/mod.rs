//! Domain layer for the storefront configuration core
//!
//! Configuration models, error types and the ports the core consumes.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, PluginError};
