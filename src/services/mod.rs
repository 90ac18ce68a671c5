//! Service layer
//!
//! - `config_resolver`: merges partial configuration over defaults and validates it
//! - `config_service`: read-only facade over the resolved configuration
//! - `plugin_registry`: ordered plugin activation

pub mod config_resolver;
pub mod config_service;
pub mod plugin_registry;

pub use config_resolver::ConfigResolver;
pub use config_service::{ConfigService, AUTH_DISABLED_WARNING};
pub use plugin_registry::PluginRegistry;
