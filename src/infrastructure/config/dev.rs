//! Settings used during local development.
//!
//! Mirrors the dev server setup: debug-friendly API settings, bearer tokens,
//! a handful of test handlers and custom fields, and the standard plugin set.
//! No credentials are embedded; SMTP login comes from `SMTP_USER` and
//! `SMTP_PASSWORD` when they are set.

use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::domain::models::config::DEFAULT_PROMOTION_ACTIONS;
use crate::domain::models::{
    CustomFieldConfig, CustomFieldType, HandlerRef, LogLevel, PartialApiOptions,
    PartialAuthOptions, PartialConfig, PartialDbConnectionOptions, PartialImportExportOptions,
    PartialLoggerOptions, PartialPaymentOptions, PartialPlaygroundOptions,
    PartialPromotionOptions, PartialShippingOptions, PluginEntry, TokenMethod,
};

/// SMTP login user for the email plugin in development.
pub const SMTP_USER_ENV_VAR: &str = "SMTP_USER";
/// SMTP login password for the email plugin in development.
pub const SMTP_PASSWORD_ENV_VAR: &str = "SMTP_PASSWORD";

/// Development configuration overrides.
pub fn development_config() -> PartialConfig {
    PartialConfig {
        api_options: Some(PartialApiOptions {
            port: Some(3000),
            admin_api_path: Some("admin-api".to_string()),
            shop_api_path: Some("shop-api".to_string()),
            admin_api_playground: Some(playground_with_credentials()),
            shop_api_playground: Some(playground_with_credentials()),
            admin_api_debug: Some(true),
            shop_api_debug: Some(true),
            ..Default::default()
        }),
        auth_options: Some(PartialAuthOptions {
            disable_auth: Some(false),
            token_method: Some(TokenMethod::Bearer),
            require_verification: Some(true),
            custom_permissions: Some(vec![]),
            auth_token_header_key: Some("auth-token".to_string()),
            session_duration: Some("1y".to_string()),
            ..Default::default()
        }),
        db_connection_options: Some(PartialDbConnectionOptions {
            logging: Some(false),
            migrations: Some(vec!["migrations".to_string()]),
            ..Default::default()
        }),
        payment_options: Some(PartialPaymentOptions {
            payment_method_eligibility_checkers: Some(vec![HandlerRef::new("test-checker")]),
            payment_method_handlers: Some(vec![HandlerRef::new("dummy-payment-handler")]),
            ..Default::default()
        }),
        promotion_options: Some(PartialPromotionOptions {
            promotion_actions: Some(
                DEFAULT_PROMOTION_ACTIONS
                    .iter()
                    .copied()
                    .chain(["discount-price-action"])
                    .map(HandlerRef::new)
                    .collect(),
            ),
            ..Default::default()
        }),
        custom_fields: Some(development_custom_fields()),
        logger_options: Some(PartialLoggerOptions {
            level: Some(LogLevel::Info),
            ..Default::default()
        }),
        import_export_options: Some(PartialImportExportOptions {
            import_assets_dir: Some("import-assets".to_string()),
        }),
        shipping_options: Some(PartialShippingOptions {
            fulfillment_handlers: Some(vec![
                HandlerRef::new("manual-fulfillment"),
                HandlerRef::new("test-handler"),
            ]),
            ..Default::default()
        }),
        plugins: Some(development_plugins()),
        ..Default::default()
    }
}

fn playground_with_credentials() -> PartialPlaygroundOptions {
    PartialPlaygroundOptions {
        enabled: Some(true),
        settings: Some(BTreeMap::from([(
            "request.credentials".to_string(),
            "include".to_string(),
        )])),
    }
}

fn development_custom_fields() -> BTreeMap<String, Vec<CustomFieldConfig>> {
    BTreeMap::from([
        (
            "ProductVariant".to_string(),
            vec![CustomFieldConfig::new("discountPrice", CustomFieldType::Int)],
        ),
        (
            "Channel".to_string(),
            vec![
                CustomFieldConfig::relation("adresse", "Address"),
                CustomFieldConfig::new("adressChannel", CustomFieldType::String),
                CustomFieldConfig::relation("logo", "Asset"),
            ],
        ),
        (
            "Customer".to_string(),
            vec![CustomFieldConfig::relation("avatar", "Asset")],
        ),
    ])
}

fn development_plugins() -> Vec<PluginEntry> {
    vec![
        PluginEntry::configured(
            "asset-server",
            json!({ "route": "assets", "asset_upload_dir": "assets" }),
        ),
        PluginEntry::bare("default-search"),
        PluginEntry::bare("default-job-queue"),
        PluginEntry::configured("email", email_plugin_options()),
        PluginEntry::configured("admin-ui", json!({ "route": "admin", "port": 5001 })),
    ]
}

fn email_plugin_options() -> Value {
    let mut transport = json!({
        "type": "smtp",
        "host": "smtp.gmail.com",
        "port": 465,
        "secure": true,
        "logging": true,
        "debug": true,
    });
    if let (Ok(user), Ok(pass)) = (
        std::env::var(SMTP_USER_ENV_VAR),
        std::env::var(SMTP_PASSWORD_ENV_VAR),
    ) {
        transport["auth"] = json!({ "user": user, "pass": pass });
    }

    json!({
        "transport": transport,
        "dev_mode": true,
        "route": "mailbox",
        "handlers": "default",
        "template_path": "email-plugin/templates",
        "output_path": "test-emails",
        "global_template_vars": {
            "from_address": "\"Storefront\" <no-reply@storefront.local>",
            "verify_email_address_url": "http://localhost:4201/verify",
            "password_reset_url": "http://localhost:4201/reset-password",
            "change_email_address_url": "http://localhost:4201/change-email-address",
        },
    })
}
