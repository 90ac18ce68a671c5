//! Errors raised while resolving configuration and activating plugins.

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to extract configuration: {0}")]
    Extract(Box<figment::Error>),

    #[error("Invalid port for {field}: must be between 1 and 65535")]
    InvalidPort { field: String },

    #[error("Invalid API path for {field}: '{value}' ({reason})")]
    InvalidApiPath {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("Invalid duration for {field}: '{value}'. Expected e.g. 500, 30s, 15m, 12h, 7d, 1y")]
    InvalidDuration { field: String, value: String },

    #[error("Duplicate code '{code}' in {field}")]
    DuplicateCode { field: String, code: String },

    #[error("Invalid language code: '{0}'. Expected e.g. en or pt_BR")]
    InvalidLanguageCode(String),

    #[error("Invalid custom field {entity}.{name}: {reason}")]
    InvalidCustomField {
        entity: String,
        name: String,
        reason: String,
    },

    #[error("Plugin '{0}' is registered more than once")]
    DuplicatePlugin(String),

    #[error("db_connection_options.{field} is required for {kind} connections")]
    MissingDbField { kind: String, field: String },

    #[error("Invalid limit for {field}: {value}. Must be at least 1")]
    InvalidLimit { field: String, value: u64 },

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Plugin activation error types
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("No factory registered for plugin '{0}'")]
    UnknownPlugin(String),

    #[error("Plugin '{name}' failed to initialize: {source}")]
    InitFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}
