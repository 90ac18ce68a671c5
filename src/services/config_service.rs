//! Read-only access to the resolved configuration.
//!
//! A [`ConfigService`] resolves its configuration exactly once, on
//! construction, and never changes it afterwards. Clones share the same
//! [`RuntimeConfig`], so the service can be handed to every consumer that
//! needs configuration instead of living in a global.

use std::sync::Arc;

use crate::domain::errors::ConfigError;
use crate::domain::models::{
    ApiOptions, AssetOptions, AuthOptions, CatalogOptions, ConfigDomain, CustomFields,
    DbConnectionOptions, EntityIdStrategy, ImportExportOptions, JobQueueOptions, LoggerOptions,
    OrderOptions, PartialConfig, PaymentOptions, PluginEntry, PromotionOptions, RuntimeConfig,
    ShippingOptions, TaxOptions,
};
use crate::domain::ports::WarnLogger;
use crate::services::config_resolver::ConfigResolver;

/// Warning emitted when authentication is switched off.
pub const AUTH_DISABLED_WARNING: &str =
    "Auth has been disabled. This should never be the case for a production system!";

/// Immutable, shareable view of the runtime configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    active: Arc<RuntimeConfig>,
}

impl ConfigService {
    /// Resolve `partial` and wrap the result.
    ///
    /// Warns through `logger` when authentication is disabled.
    pub fn new(
        resolver: &ConfigResolver,
        partial: &PartialConfig,
        logger: &dyn WarnLogger,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_resolved(resolver.resolve(partial)?, logger))
    }

    /// Wrap a configuration that was already resolved.
    ///
    /// Warns through `logger` when authentication is disabled, like [`Self::new`].
    pub fn from_resolved(active: RuntimeConfig, logger: &dyn WarnLogger) -> Self {
        if active.auth_options.disable_auth {
            logger.warn(AUTH_DISABLED_WARNING);
        }
        tracing::debug!(
            plugins = active.plugins.len(),
            db = %active.db_connection_options.kind,
            "configuration resolved"
        );

        Self {
            active: Arc::new(active),
        }
    }

    /// The whole resolved configuration.
    pub fn runtime(&self) -> &RuntimeConfig {
        &self.active
    }

    /// Whether two services share the same underlying configuration instance.
    pub fn shares_instance_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.active, &other.active)
    }

    /// Listen address, API paths and CORS.
    pub fn api_options(&self) -> &ApiOptions {
        &self.active.api_options
    }

    /// Authentication and session settings.
    pub fn auth_options(&self) -> &AuthOptions {
        &self.active.auth_options
    }

    /// Collection filters and the price calculation strategy.
    pub fn catalog_options(&self) -> &CatalogOptions {
        &self.active.catalog_options
    }

    /// Asset naming, preview and storage strategies.
    pub fn asset_options(&self) -> &AssetOptions {
        &self.active.asset_options
    }

    /// Database connection for the driver selected by `DB`.
    pub fn db_connection_options(&self) -> &DbConnectionOptions {
        &self.active.db_connection_options
    }

    /// Promotion condition and action handlers.
    pub fn promotion_options(&self) -> &PromotionOptions {
        &self.active.promotion_options
    }

    /// Shipping eligibility checkers and calculators.
    pub fn shipping_options(&self) -> &ShippingOptions {
        &self.active.shipping_options
    }

    /// Order item limits and merge strategies.
    pub fn order_options(&self) -> &OrderOptions {
        &self.active.order_options
    }

    /// Payment method handlers.
    pub fn payment_options(&self) -> &PaymentOptions {
        &self.active.payment_options
    }

    /// Tax zone and calculation strategies.
    pub fn tax_options(&self) -> &TaxOptions {
        &self.active.tax_options
    }

    /// Import asset locations.
    pub fn import_export_options(&self) -> &ImportExportOptions {
        &self.active.import_export_options
    }

    /// Job queue strategy, active queues and polling.
    pub fn job_queue_options(&self) -> &JobQueueOptions {
        &self.active.job_queue_options
    }

    /// Custom field definitions per entity.
    pub fn custom_fields(&self) -> &CustomFields {
        &self.active.custom_fields
    }

    /// Plugins in activation order.
    pub fn plugins(&self) -> &[PluginEntry] {
        &self.active.plugins
    }

    /// Log level, format and file output.
    pub fn logger_options(&self) -> &LoggerOptions {
        &self.active.logger_options
    }

    /// Token of the default channel, if one is set.
    pub fn default_channel_token(&self) -> Option<&str> {
        self.active.default_channel_token.as_deref()
    }

    /// Language used when a request names none.
    pub fn default_language_code(&self) -> &str {
        &self.active.default_language_code
    }

    /// Strategy for generating entity ids.
    pub fn entity_id_strategy(&self) -> EntityIdStrategy {
        self.active.entity_id_strategy
    }

    /// Keyed access to one domain as JSON.
    ///
    /// `General` groups the top-level channel token, language code and id
    /// strategy.
    pub fn domain(&self, domain: ConfigDomain) -> serde_json::Value {
        let config = &*self.active;
        let value = match domain {
            ConfigDomain::Api => serde_json::to_value(&config.api_options),
            ConfigDomain::Auth => serde_json::to_value(&config.auth_options),
            ConfigDomain::Catalog => serde_json::to_value(&config.catalog_options),
            ConfigDomain::Assets => serde_json::to_value(&config.asset_options),
            ConfigDomain::Db => serde_json::to_value(&config.db_connection_options),
            ConfigDomain::Promotions => serde_json::to_value(&config.promotion_options),
            ConfigDomain::Shipping => serde_json::to_value(&config.shipping_options),
            ConfigDomain::Orders => serde_json::to_value(&config.order_options),
            ConfigDomain::Payments => serde_json::to_value(&config.payment_options),
            ConfigDomain::Tax => serde_json::to_value(&config.tax_options),
            ConfigDomain::ImportExport => serde_json::to_value(&config.import_export_options),
            ConfigDomain::JobQueue => serde_json::to_value(&config.job_queue_options),
            ConfigDomain::CustomFields => serde_json::to_value(&config.custom_fields),
            ConfigDomain::Plugins => serde_json::to_value(&config.plugins),
            ConfigDomain::Logger => serde_json::to_value(&config.logger_options),
            ConfigDomain::General => Ok(serde_json::json!({
                "default_channel_token": config.default_channel_token,
                "default_language_code": config.default_language_code,
                "entity_id_strategy": config.entity_id_strategy,
            })),
        };
        value.unwrap_or_default()
    }
}
