//! Storefront runtime configuration
//!
//! Resolves the runtime configuration of the storefront backend: a partial,
//! user-supplied configuration is layered over a complete set of defaults,
//! validated, and exposed read-only through [`ConfigService`].
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Configuration models, errors and ports
//! - **Service Layer** (`services`): Resolution, the configuration service and plugin activation
//! - **Infrastructure Layer** (`infrastructure`): Layered loading and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::{ConfigLoader, TracingWarnLogger};
//!
//! fn main() -> anyhow::Result<()> {
//!     let service = ConfigLoader::new().load_service(&TracingWarnLogger)?;
//!     println!("listening on {}", service.api_options().port);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    ConfigDomain, DatabaseType, PartialConfig, PluginEntry, RuntimeConfig, Secret,
};
pub use domain::ports::{PluginFactory, PluginHandle, WarnLogger};
pub use domain::{ConfigError, PluginError};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::logging::{LoggerImpl, TracingWarnLogger};
pub use services::{ConfigResolver, ConfigService, PluginRegistry, AUTH_DISABLED_WARNING};
