//! `show` command.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::ConfigDomain;
use crate::infrastructure::logging::SecretScrubber;
use crate::services::ConfigService;

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Domain shown, or `None` for the whole configuration.
    pub domain: Option<String>,
    pub config: Value,
}

impl ShowOutput {
    /// Snapshot `domain` (or everything) from `service`, secrets redacted.
    pub fn collect(service: &ConfigService, domain: Option<ConfigDomain>) -> Result<Self> {
        let mut config = match domain {
            Some(domain) => service.domain(domain),
            None => serde_json::to_value(service.runtime())
                .context("Failed to serialize resolved configuration")?,
        };
        SecretScrubber::new()
            .context("Failed to build secret scrubber")?
            .redact_value(&mut config);

        Ok(Self {
            domain: domain.map(|domain| domain.to_string()),
            config,
        })
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let table = TableFormatter::new().format_config(&self.config);
        match &self.domain {
            Some(domain) => format!("Domain: {domain}\n{table}"),
            None => table,
        }
    }

    fn to_json(&self) -> Value {
        self.config.clone()
    }
}

pub fn execute(service: &ConfigService, domain: Option<ConfigDomain>, json: bool) -> Result<()> {
    let result = ShowOutput::collect(service, domain)?;
    output(&result, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PartialConfig, PartialDbConnectionOptions, Secret};
    use crate::domain::ports::WarnLogger;
    use crate::infrastructure::logging::REDACTED;
    use crate::services::ConfigResolver;

    struct Silent;
    impl WarnLogger for Silent {
        fn warn(&self, _message: &str) {}
    }

    fn service_with_password() -> ConfigService {
        let partial = PartialConfig {
            db_connection_options: Some(PartialDbConnectionOptions {
                password: Some(Secret::new("hunter2")),
                ..Default::default()
            }),
            ..Default::default()
        };
        ConfigService::new(&ConfigResolver::default(), &partial, &Silent).unwrap()
    }

    #[test]
    fn test_show_redacts_password() {
        let result = ShowOutput::collect(&service_with_password(), None).unwrap();

        assert_eq!(result.config["db_connection_options"]["password"], REDACTED);
        assert!(!result.to_json().to_string().contains("hunter2"));
    }

    #[test]
    fn test_show_single_domain() {
        let result = ShowOutput::collect(&service_with_password(), Some(ConfigDomain::Db)).unwrap();

        assert_eq!(result.domain.as_deref(), Some("db"));
        assert_eq!(result.config["type"], "mariadb");
        assert_eq!(result.config["password"], REDACTED);
    }
}
