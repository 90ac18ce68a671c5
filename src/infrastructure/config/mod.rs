//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Development settings layer
//! - YAML file loading
//! - Environment variable overrides

pub mod dev;
pub mod loader;

pub use dev::development_config;
pub use loader::{ConfigLoader, CONFIG_FILE, CONFIG_PATH_ENV_VAR, ENV_PREFIX, LOCAL_CONFIG_FILE};
