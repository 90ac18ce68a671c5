//! `plugins` command.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::infrastructure::logging::SecretScrubber;
use crate::services::ConfigService;

#[derive(Debug, Serialize)]
pub struct PluginRow {
    pub position: usize,
    pub name: String,
    pub options: Value,
}

#[derive(Debug, Serialize)]
pub struct PluginsOutput {
    pub plugins: Vec<PluginRow>,
}

impl PluginsOutput {
    /// Plugins in activation order, option secrets redacted.
    pub fn collect(service: &ConfigService) -> Result<Self> {
        let scrubber = SecretScrubber::new().context("Failed to build secret scrubber")?;
        let plugins = service
            .plugins()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut options = entry.options();
                scrubber.redact_value(&mut options);
                PluginRow {
                    position: index + 1,
                    name: entry.name().to_string(),
                    options,
                }
            })
            .collect();

        Ok(Self { plugins })
    }
}

impl CommandOutput for PluginsOutput {
    fn to_human(&self) -> String {
        if self.plugins.is_empty() {
            return "No plugins configured.".to_string();
        }

        let rows: Vec<(String, Value)> = self
            .plugins
            .iter()
            .map(|row| (row.name.clone(), row.options.clone()))
            .collect();
        format!(
            "{} plugin(s), in activation order:\n{}",
            self.plugins.len(),
            TableFormatter::new().format_plugins(&rows)
        )
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(service: &ConfigService, json: bool) -> Result<()> {
    output(&PluginsOutput::collect(service)?, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PartialConfig, PluginEntry};
    use crate::domain::ports::WarnLogger;
    use crate::services::ConfigResolver;
    use serde_json::json;

    struct Silent;
    impl WarnLogger for Silent {
        fn warn(&self, _message: &str) {}
    }

    #[test]
    fn test_plugins_in_order_with_redacted_options() {
        let partial = PartialConfig {
            plugins: Some(vec![
                PluginEntry::bare("default-search"),
                PluginEntry::configured(
                    "email",
                    json!({ "transport": { "auth": { "user": "mailer", "pass": "smtp-pw" } } }),
                ),
            ]),
            ..Default::default()
        };
        let service = ConfigService::new(&ConfigResolver::default(), &partial, &Silent).unwrap();

        let result = PluginsOutput::collect(&service).unwrap();

        assert_eq!(result.plugins[0].position, 1);
        assert_eq!(result.plugins[0].name, "default-search");
        assert_eq!(result.plugins[1].name, "email");
        assert_eq!(result.plugins[1].options["transport"]["auth"]["pass"], "[REDACTED]");
    }

    #[test]
    fn test_no_plugins_message() {
        let result = PluginsOutput { plugins: vec![] };
        assert_eq!(result.to_human(), "No plugins configured.");
    }
}
