//! Plugin port trait.
//!
//! Plugins are registered in configuration as opaque entries. At startup the
//! application looks up a [`PluginFactory`] for every entry, in order, and
//! hands it the entry's options.

use async_trait::async_trait;
use std::any::Any;
use std::fmt;

/// Handle returned by a plugin's init routine, kept by the application.
pub struct PluginHandle {
    name: String,
    inner: Box<dyn Any + Send + Sync>,
}

impl PluginHandle {
    /// Wrap whatever the plugin wants the application to hold on to.
    pub fn new<T: Any + Send + Sync>(name: impl Into<String>, inner: T) -> Self {
        Self {
            name: name.into(),
            inner: Box::new(inner),
        }
    }

    /// Name of the plugin that produced this handle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the handle as its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for PluginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginHandle").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Port for plugin initialization.
#[async_trait]
pub trait PluginFactory: Send + Sync {
    /// Identifier matched against configured plugin entries.
    fn name(&self) -> &str;

    /// Initialize the plugin with the options from its configuration entry.
    async fn init(&self, options: &serde_json::Value) -> anyhow::Result<PluginHandle>;
}
