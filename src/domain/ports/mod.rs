//! Port trait definitions
//!
//! Interfaces the configuration core consumes without owning:
//! - WarnLogger: startup warnings
//! - PluginFactory: plugin initialization

pub mod logger;
pub mod plugin;

pub use logger::WarnLogger;
pub use plugin::{PluginFactory, PluginHandle};
