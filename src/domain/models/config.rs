//! Fully resolved runtime configuration.
//!
//! Every field of [`RuntimeConfig`] is populated. Values come from the
//! defaults below unless a partial configuration overrides them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::custom_field::CustomFields;
use super::database::{DatabaseType, DbConnectionOptions};
use super::duration::parse_duration;
use super::handler::{handlers, HandlerRef};
use super::logger::LoggerOptions;
use super::plugin::PluginEntry;
use super::secret::Secret;

/// Main configuration structure for the commerce backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuntimeConfig {
    /// GraphQL API server settings
    pub api_options: ApiOptions,

    /// Authentication and session settings
    pub auth_options: AuthOptions,

    /// Catalog settings
    pub catalog_options: CatalogOptions,

    /// Asset handling settings
    pub asset_options: AssetOptions,

    /// Database connection
    pub db_connection_options: DbConnectionOptions,

    /// Promotion conditions and actions
    pub promotion_options: PromotionOptions,

    /// Shipping and fulfillment handlers
    pub shipping_options: ShippingOptions,

    /// Order handling settings
    pub order_options: OrderOptions,

    /// Payment handlers
    pub payment_options: PaymentOptions,

    /// Tax strategies
    pub tax_options: TaxOptions,

    /// Import / export settings
    pub import_export_options: ImportExportOptions,

    /// Job queue settings
    pub job_queue_options: JobQueueOptions,

    /// Custom fields keyed by entity name
    pub custom_fields: CustomFields,

    /// Plugins in activation order
    pub plugins: Vec<PluginEntry>,

    /// Logger settings
    pub logger_options: LoggerOptions,

    /// Token of the channel used when a request names none
    pub default_channel_token: Option<String>,

    /// Language used when a request names none
    pub default_language_code: String,

    /// How entity ids are generated
    pub entity_id_strategy: EntityIdStrategy,
}

impl RuntimeConfig {
    /// Built-in defaults with connection settings for the given driver.
    pub fn defaults_for(db: DatabaseType) -> Self {
        Self {
            db_connection_options: DbConnectionOptions::for_type(db),
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_options: ApiOptions::default(),
            auth_options: AuthOptions::default(),
            catalog_options: CatalogOptions::default(),
            asset_options: AssetOptions::default(),
            db_connection_options: DbConnectionOptions::default(),
            promotion_options: PromotionOptions::default(),
            shipping_options: ShippingOptions::default(),
            order_options: OrderOptions::default(),
            payment_options: PaymentOptions::default(),
            tax_options: TaxOptions::default(),
            import_export_options: ImportExportOptions::default(),
            job_queue_options: JobQueueOptions::default(),
            custom_fields: BTreeMap::new(),
            plugins: vec![],
            logger_options: LoggerOptions::default(),
            default_channel_token: None,
            default_language_code: "en".to_string(),
            entity_id_strategy: EntityIdStrategy::AutoIncrement,
        }
    }
}

/// GraphQL API server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiOptions {
    /// Hostname to bind, empty for all interfaces
    pub hostname: String,

    /// Port to listen on
    pub port: u16,

    /// Path of the admin API, without leading slash
    pub admin_api_path: String,

    /// Path of the shop API, without leading slash
    pub shop_api_path: String,

    /// Admin API playground
    pub admin_api_playground: PlaygroundOptions,

    /// Shop API playground
    pub shop_api_playground: PlaygroundOptions,

    /// Include debug information in admin API errors
    pub admin_api_debug: bool,

    /// Include debug information in shop API errors
    pub shop_api_debug: bool,

    /// Header or query parameter carrying the channel token
    pub channel_token_key: String,

    /// CORS settings
    pub cors: CorsOptions,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            port: 3000,
            admin_api_path: "admin-api".to_string(),
            shop_api_path: "shop-api".to_string(),
            admin_api_playground: PlaygroundOptions::default(),
            shop_api_playground: PlaygroundOptions::default(),
            admin_api_debug: false,
            shop_api_debug: false,
            channel_token_key: "channel-token".to_string(),
            cors: CorsOptions::default(),
        }
    }
}

/// GraphQL playground configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlaygroundOptions {
    /// Serve the playground
    pub enabled: bool,

    /// Playground settings, e.g. `request.credentials`
    pub settings: BTreeMap<String, String>,
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CorsOptions {
    /// Send CORS headers
    pub enabled: bool,

    /// Allowed origins, empty reflects the request origin
    pub origins: Vec<String>,

    /// Allow credentials
    pub credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: vec![],
            credentials: true,
        }
    }
}

/// How the session token travels between client and server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMethod {
    /// Signed session cookie
    Cookie,
    /// Token in a response / request header
    Bearer,
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthOptions {
    /// Turn off all permission checks
    pub disable_auth: bool,

    /// Session token transport
    pub token_method: TokenMethod,

    /// Cookie signing secret, only ever supplied through the environment
    pub cookie_secret: Option<Secret>,

    /// Header carrying the bearer token
    pub auth_token_header_key: String,

    /// Session lifetime, e.g. `1y`
    pub session_duration: String,

    /// Seconds a session stays cached before being re-read
    pub session_cache_ttl_secs: u64,

    /// Require email verification for new customer accounts
    pub require_verification: bool,

    /// Lifetime of verification tokens, e.g. `7d`
    pub verification_token_duration: String,

    /// Username of the initial superadmin
    pub superadmin_username: String,

    /// Password of the initial superadmin, only ever supplied through the environment
    pub superadmin_password: Option<Secret>,

    /// Additional permission names
    pub custom_permissions: Vec<String>,
}

impl AuthOptions {
    /// Session lifetime as a [`std::time::Duration`].
    pub fn session_duration(&self) -> Option<std::time::Duration> {
        parse_duration(&self.session_duration)
    }

    /// Verification token lifetime as a [`std::time::Duration`].
    pub fn verification_token_duration(&self) -> Option<std::time::Duration> {
        parse_duration(&self.verification_token_duration)
    }
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            disable_auth: false,
            token_method: TokenMethod::Cookie,
            cookie_secret: None,
            auth_token_header_key: "auth-token".to_string(),
            session_duration: "1y".to_string(),
            session_cache_ttl_secs: 300,
            require_verification: true,
            verification_token_duration: "7d".to_string(),
            superadmin_username: "superadmin".to_string(),
            superadmin_password: None,
            custom_permissions: vec![],
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogOptions {
    /// Filters available to collections
    pub collection_filters: Vec<HandlerRef>,

    /// Strategy computing variant prices
    pub price_calculation_strategy: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            collection_filters: handlers(&["facet-value-filter", "variant-name-filter"]),
            price_calculation_strategy: "default".to_string(),
        }
    }
}

/// Asset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssetOptions {
    /// Strategy naming stored files
    pub asset_naming_strategy: String,

    /// Where asset files are stored
    pub asset_storage_strategy: String,

    /// How previews are generated
    pub asset_preview_strategy: String,

    /// MIME types and extensions accepted on upload
    pub permitted_file_types: Vec<String>,

    /// Upload size limit in bytes
    pub upload_max_file_size: u64,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            asset_naming_strategy: "default".to_string(),
            asset_storage_strategy: "no-asset-storage".to_string(),
            asset_preview_strategy: "no-asset-preview".to_string(),
            permitted_file_types: ["image/*", "video/*", "audio/*", ".pdf"]
                .into_iter()
                .map(String::from)
                .collect(),
            upload_max_file_size: 20_971_520,
        }
    }
}

/// Promotion actions shipped with the backend.
pub const DEFAULT_PROMOTION_ACTIONS: &[&str] = &[
    "order_percentage_discount",
    "order_fixed_discount",
    "discount_on_item_with_facets",
    "product_percentage_discount",
    "buy_x_get_y_free",
    "free_shipping",
];

/// Promotion conditions shipped with the backend.
pub const DEFAULT_PROMOTION_CONDITIONS: &[&str] = &[
    "minimum_order_amount",
    "at_least_n_with_facets",
    "contains_products",
    "customer_group",
    "buy_x_get_y_free",
    "has_placed_orders",
];

/// Promotion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PromotionOptions {
    /// Conditions a promotion may test
    pub promotion_conditions: Vec<HandlerRef>,

    /// Actions a promotion may apply
    pub promotion_actions: Vec<HandlerRef>,
}

impl Default for PromotionOptions {
    fn default() -> Self {
        Self {
            promotion_conditions: handlers(DEFAULT_PROMOTION_CONDITIONS),
            promotion_actions: handlers(DEFAULT_PROMOTION_ACTIONS),
        }
    }
}

/// Shipping configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShippingOptions {
    /// Checkers deciding whether a method applies to an order
    pub shipping_eligibility_checkers: Vec<HandlerRef>,

    /// Calculators pricing a shipping method
    pub shipping_calculators: Vec<HandlerRef>,

    /// Handlers creating fulfillments
    pub fulfillment_handlers: Vec<HandlerRef>,
}

impl Default for ShippingOptions {
    fn default() -> Self {
        Self {
            shipping_eligibility_checkers: handlers(&["default-shipping-eligibility-checker"]),
            shipping_calculators: handlers(&["default-shipping-calculator"]),
            fulfillment_handlers: handlers(&["manual-fulfillment"]),
        }
    }
}

/// Order configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderOptions {
    /// Maximum total item quantity per order
    pub order_items_limit: u32,

    /// Maximum quantity per order line
    pub order_line_items_limit: u32,

    /// Merge strategy on login
    pub merge_strategy: String,

    /// Merge strategy during checkout
    pub checkout_merge_strategy: String,

    /// Strategy generating order codes
    pub order_code_strategy: String,

    /// Extra order process states
    pub process: Vec<HandlerRef>,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            order_items_limit: 999,
            order_line_items_limit: 999,
            merge_strategy: "merge-orders".to_string(),
            checkout_merge_strategy: "use-guest".to_string(),
            order_code_strategy: "default".to_string(),
            process: vec![],
        }
    }
}

/// Payment configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentOptions {
    /// Payment method handlers
    pub payment_method_handlers: Vec<HandlerRef>,

    /// Checkers deciding whether a payment method applies to an order
    pub payment_method_eligibility_checkers: Vec<HandlerRef>,

    /// Extra payment process states
    pub custom_payment_process: Vec<HandlerRef>,
}

/// Tax configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaxOptions {
    /// Strategy picking the active tax zone
    pub tax_zone_strategy: String,

    /// Strategy computing taxes
    pub tax_calculation_strategy: String,
}

impl Default for TaxOptions {
    fn default() -> Self {
        Self {
            tax_zone_strategy: "default".to_string(),
            tax_calculation_strategy: "default".to_string(),
        }
    }
}

/// Import / export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImportExportOptions {
    /// Directory holding assets referenced by import files
    pub import_assets_dir: String,
}

impl Default for ImportExportOptions {
    fn default() -> Self {
        Self {
            import_assets_dir: "import-assets".to_string(),
        }
    }
}

/// Job queue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobQueueOptions {
    /// Queue backend
    pub job_queue_strategy: String,

    /// Queues this process works on, empty means all
    pub active_queues: Vec<String>,

    /// Poll interval in milliseconds
    pub polling_interval_ms: u64,
}

impl Default for JobQueueOptions {
    fn default() -> Self {
        Self {
            job_queue_strategy: "in-memory".to_string(),
            active_queues: vec![],
            polling_interval_ms: 200,
        }
    }
}

/// Entity id generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityIdStrategy {
    /// Database sequence
    AutoIncrement,
    /// Random UUIDs
    Uuid,
}

/// Named configuration domain, for keyed access to [`RuntimeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ConfigDomain {
    Api,
    Auth,
    Catalog,
    Assets,
    Db,
    Promotions,
    Shipping,
    Orders,
    Payments,
    Tax,
    ImportExport,
    JobQueue,
    CustomFields,
    Plugins,
    Logger,
    General,
}

impl ConfigDomain {
    /// Every domain, in display order.
    pub const ALL: [Self; 16] = [
        Self::Api,
        Self::Auth,
        Self::Catalog,
        Self::Assets,
        Self::Db,
        Self::Promotions,
        Self::Shipping,
        Self::Orders,
        Self::Payments,
        Self::Tax,
        Self::ImportExport,
        Self::JobQueue,
        Self::CustomFields,
        Self::Plugins,
        Self::Logger,
        Self::General,
    ];

    /// Short name used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Auth => "auth",
            Self::Catalog => "catalog",
            Self::Assets => "assets",
            Self::Db => "db",
            Self::Promotions => "promotions",
            Self::Shipping => "shipping",
            Self::Orders => "orders",
            Self::Payments => "payments",
            Self::Tax => "tax",
            Self::ImportExport => "import-export",
            Self::JobQueue => "job-queue",
            Self::CustomFields => "custom-fields",
            Self::Plugins => "plugins",
            Self::Logger => "logger",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ConfigDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|d| d.as_str()).collect();
                format!("unknown configuration domain '{s}', expected one of: {}", known.join(", "))
            })
    }
}
