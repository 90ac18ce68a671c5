//! Registry of plugin factories and ordered plugin activation.
//!
//! The [`PluginRegistry`] maps plugin identifiers to their factories.
//! [`PluginRegistry::activate`] walks the configured plugin list front to back
//! and initializes each entry, so startup side effects happen in the order the
//! configuration lists them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::PluginError;
use crate::domain::models::PluginEntry;
use crate::domain::ports::{PluginFactory, PluginHandle};

/// Central registry of plugin factories.
#[derive(Default)]
pub struct PluginRegistry {
    /// Factories keyed by plugin name.
    factories: HashMap<String, Arc<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("PluginRegistry")
            .field("factories", &names)
            .finish()
    }
}

impl PluginRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, factory: Arc<dyn PluginFactory>) {
        let name = factory.name().to_string();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::warn!(plugin = %name, "plugin factory replaced");
        }
    }

    /// Whether a factory exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Initialize every entry in order.
    ///
    /// Stops at the first unknown plugin or failed init. Handles of plugins
    /// initialized before the failure are dropped.
    pub async fn activate(&self, entries: &[PluginEntry]) -> Result<Vec<PluginHandle>, PluginError> {
        let mut handles = Vec::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            let name = entry.name();
            let factory = self
                .factories
                .get(name)
                .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))?;

            let handle = factory
                .init(&entry.options())
                .await
                .map_err(|source| PluginError::InitFailed {
                    name: name.to_string(),
                    source,
                })?;

            tracing::info!(plugin = %name, position, "plugin activated");
            handles.push(handle);
        }

        Ok(handles)
    }
}
