pub mod config;
pub mod custom_field;
pub mod database;
pub mod duration;
pub mod handler;
pub mod logger;
pub mod partial;
pub mod plugin;
pub mod secret;

pub use config::{
    ApiOptions, AssetOptions, AuthOptions, CatalogOptions, ConfigDomain, CorsOptions,
    EntityIdStrategy, ImportExportOptions, JobQueueOptions, OrderOptions, PaymentOptions,
    PlaygroundOptions, PromotionOptions, RuntimeConfig, ShippingOptions, TaxOptions, TokenMethod,
};
pub use custom_field::{CustomFieldConfig, CustomFieldType, CustomFields};
pub use database::{DatabaseType, DbConnectionOptions, DB_ENV_VAR};
pub use handler::HandlerRef;
pub use logger::{LogFormat, LogLevel, LoggerOptions, RotationPolicy};
pub use partial::{
    PartialApiOptions, PartialAssetOptions, PartialAuthOptions, PartialCatalogOptions,
    PartialConfig, PartialCorsOptions, PartialDbConnectionOptions, PartialImportExportOptions,
    PartialJobQueueOptions, PartialLoggerOptions, PartialOrderOptions, PartialPaymentOptions,
    PartialPlaygroundOptions, PartialPromotionOptions, PartialShippingOptions, PartialTaxOptions,
};
pub use plugin::{ConfiguredPlugin, PluginEntry};
pub use secret::Secret;
