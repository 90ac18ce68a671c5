//! `validate` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::ConfigError;
use crate::domain::models::RuntimeConfig;
use crate::domain::ports::WarnLogger;
use crate::services::ConfigService;

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub database: String,
    pub plugins: usize,
    pub auth_disabled: bool,
}

impl From<&ConfigService> for ValidateOutput {
    fn from(service: &ConfigService) -> Self {
        Self {
            valid: true,
            database: service.db_connection_options().kind.to_string(),
            plugins: service.plugins().len(),
            auth_disabled: service.auth_options().disable_auth,
        }
    }
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            "Configuration is valid.".to_string(),
            format!("  Database: {}", self.database),
            format!("  Plugins:  {}", self.plugins),
        ];
        if self.auth_disabled {
            lines.push("  Authentication is DISABLED".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Report the outcome of resolving the configuration.
///
/// Resolution errors are returned, so the process exits non-zero.
pub fn execute(
    resolved: Result<RuntimeConfig, ConfigError>,
    logger: &dyn WarnLogger,
    json: bool,
) -> Result<()> {
    let config = resolved.context("Configuration is invalid")?;
    let service = ConfigService::from_resolved(config, logger);
    output(&ValidateOutput::from(&service), json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PartialApiOptions, PartialConfig};
    use crate::services::ConfigResolver;

    struct Silent;
    impl WarnLogger for Silent {
        fn warn(&self, _message: &str) {}
    }

    #[test]
    fn test_valid_defaults() {
        let service =
            ConfigService::new(&ConfigResolver::default(), &PartialConfig::default(), &Silent)
                .unwrap();
        let result = ValidateOutput::from(&service);

        assert!(result.valid);
        assert_eq!(result.database, "mariadb");
        assert!(result.to_human().starts_with("Configuration is valid."));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let partial = PartialConfig {
            api_options: Some(PartialApiOptions {
                admin_api_path: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = ConfigResolver::default().resolve(&partial);
        let err = execute(resolved, &Silent, true).unwrap_err();
        assert!(err.to_string().contains("Configuration is invalid"));
    }
}
