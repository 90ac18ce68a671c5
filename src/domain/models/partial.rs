//! User-supplied configuration where any field may be omitted.
//!
//! Each option group mirrors its counterpart in [`super::config`] with every
//! field optional. Absent fields are skipped when serialized so that layering a
//! partial over the defaults only touches what the user actually set. Unknown
//! keys are rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::config::{EntityIdStrategy, RuntimeConfig, TokenMethod};
use super::custom_field::CustomFields;
use super::database::DatabaseType;
use super::handler::HandlerRef;
use super::logger::{LogFormat, LogLevel, RotationPolicy};
use super::plugin::PluginEntry;
use super::secret::Secret;

/// Partial configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_options: Option<PartialApiOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_options: Option<PartialAuthOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_options: Option<PartialCatalogOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_options: Option<PartialAssetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_connection_options: Option<PartialDbConnectionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_options: Option<PartialPromotionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<PartialShippingOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_options: Option<PartialOrderOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PartialPaymentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_options: Option<PartialTaxOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_export_options: Option<PartialImportExportOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_queue_options: Option<PartialJobQueueOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger_options: Option<PartialLoggerOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_channel_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id_strategy: Option<EntityIdStrategy>,
}

/// A fully resolved configuration is also a valid partial with every field set.
impl TryFrom<&RuntimeConfig> for PartialConfig {
    type Error = serde_json::Error;

    fn try_from(config: &RuntimeConfig) -> Result<Self, Self::Error> {
        serde_json::from_value(serde_json::to_value(config)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialApiOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_api_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_api_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_api_playground: Option<PartialPlaygroundOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_api_playground: Option<PartialPlaygroundOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_api_debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_api_debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_token_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<PartialCorsOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialPlaygroundOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialCorsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialAuthOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_method: Option<TokenMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_secret: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token_header_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cache_ttl_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superadmin_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superadmin_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialCatalogOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_filters: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_calculation_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialAssetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_naming_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_storage_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_preview_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_file_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_max_file_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialDbConnectionOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DatabaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialPromotionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_conditions: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_actions: Option<Vec<HandlerRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialShippingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_eligibility_checkers: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_calculators: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_handlers: Option<Vec<HandlerRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialOrderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_items_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_line_items_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_merge_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_code_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<HandlerRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialPaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_handlers: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_eligibility_checkers: Option<Vec<HandlerRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_payment_process: Option<Vec<HandlerRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialTaxOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_zone_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_calculation_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialImportExportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_assets_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialJobQueueOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_queue_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_queues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PartialLoggerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<LogFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<std::path::PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_stdout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationPolicy>,
}
