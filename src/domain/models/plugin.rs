use serde::{Deserialize, Serialize};

/// One plugin registration.
///
/// Either a bare identifier (`default-search`) or a named entry with
/// initialization options. The list order is the activation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    /// Plugin activated with its own defaults
    Bare(String),
    /// Plugin activated with options handed to its init routine
    Configured(ConfiguredPlugin),
}

/// A plugin plus the options passed to its init routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredPlugin {
    /// Plugin identifier
    pub name: String,

    /// Init options, opaque to the configuration layer
    #[serde(default = "empty_options")]
    pub options: serde_json::Value,
}

fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl PluginEntry {
    /// Bare plugin identifier.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Bare(name.into())
    }

    /// Plugin with init options.
    pub fn configured(name: impl Into<String>, options: serde_json::Value) -> Self {
        Self::Configured(ConfiguredPlugin {
            name: name.into(),
            options,
        })
    }

    /// Plugin identifier.
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Configured(plugin) => &plugin.name,
        }
    }

    /// Init options; bare entries get an empty object.
    pub fn options(&self) -> serde_json::Value {
        match self {
            Self::Bare(_) => empty_options(),
            Self::Configured(plugin) => plugin.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_parses_both_shapes() {
        let yaml = r"
- default-search
- name: asset-server
  options:
    route: assets
";
        let entries: Vec<PluginEntry> = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(entries[0], PluginEntry::bare("default-search"));
        assert_eq!(entries[1].name(), "asset-server");
        assert_eq!(entries[1].options(), json!({ "route": "assets" }));
    }

    #[test]
    fn test_bare_entry_has_empty_options() {
        assert_eq!(PluginEntry::bare("default-job-queue").options(), json!({}));
    }
}
