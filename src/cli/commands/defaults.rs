//! `defaults` command.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::infrastructure::logging::SecretScrubber;
use crate::services::ConfigResolver;

#[derive(Debug, Serialize)]
pub struct DefaultsOutput {
    pub database: String,
    pub defaults: Value,
}

impl DefaultsOutput {
    pub fn collect(resolver: &ConfigResolver) -> Result<Self> {
        let defaults = resolver.defaults();
        let mut value =
            serde_json::to_value(defaults).context("Failed to serialize default configuration")?;
        SecretScrubber::new()
            .context("Failed to build secret scrubber")?
            .redact_value(&mut value);

        Ok(Self {
            database: defaults.db_connection_options.kind.to_string(),
            defaults: value,
        })
    }
}

impl CommandOutput for DefaultsOutput {
    fn to_human(&self) -> String {
        format!(
            "Defaults for {} connection\n{}",
            self.database,
            TableFormatter::new().format_config(&self.defaults)
        )
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(resolver: &ConfigResolver, json: bool) -> Result<()> {
    output(&DefaultsOutput::collect(resolver)?, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DatabaseType, RuntimeConfig};

    #[test]
    fn test_defaults_follow_database_type() {
        let resolver = ConfigResolver::new(RuntimeConfig::defaults_for(DatabaseType::Postgres));
        let result = DefaultsOutput::collect(&resolver).unwrap();

        assert_eq!(result.database, "postgres");
        assert_eq!(result.defaults["db_connection_options"]["port"], 5432);
        assert_eq!(result.defaults["plugins"], serde_json::json!([]));
    }
}
