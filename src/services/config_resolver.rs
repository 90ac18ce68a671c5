//! Resolution of a partial configuration into a [`RuntimeConfig`].
//!
//! The partial is layered over the defaults with figment: option groups merge
//! field by field, maps merge per key, and arrays (plugins, handler lists) are
//! replaced wholesale by the partial's value. The merged result is then
//! validated.

use figment::providers::Serialized;
use figment::Figment;
use std::collections::HashSet;

use crate::domain::errors::ConfigError;
use crate::domain::models::duration::parse_duration;
use crate::domain::models::{
    CustomFieldType, DatabaseType, HandlerRef, PartialConfig, RuntimeConfig,
};

/// Resolves partial configurations against a fixed set of defaults.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    defaults: RuntimeConfig,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl ConfigResolver {
    /// Resolver over the given defaults.
    pub const fn new(defaults: RuntimeConfig) -> Self {
        Self { defaults }
    }

    /// Resolver whose database defaults follow the `DB` environment variable.
    pub fn from_env() -> Self {
        Self::new(RuntimeConfig::defaults_for(DatabaseType::from_env()))
    }

    /// The defaults every resolution starts from.
    pub const fn defaults(&self) -> &RuntimeConfig {
        &self.defaults
    }

    /// Merge `partial` over the defaults and validate the result.
    pub fn resolve(&self, partial: &PartialConfig) -> Result<RuntimeConfig, ConfigError> {
        let config: RuntimeConfig = Figment::new()
            .merge(Serialized::defaults(&self.defaults))
            .merge(Serialized::defaults(partial))
            .extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate a resolved configuration.
    pub fn validate(config: &RuntimeConfig) -> Result<(), ConfigError> {
        let api = &config.api_options;
        if api.port == 0 {
            return Err(ConfigError::InvalidPort {
                field: "api_options.port".to_string(),
            });
        }
        validate_api_path("api_options.admin_api_path", &api.admin_api_path)?;
        validate_api_path("api_options.shop_api_path", &api.shop_api_path)?;
        if api.admin_api_path == api.shop_api_path {
            return Err(ConfigError::InvalidApiPath {
                field: "api_options.shop_api_path".to_string(),
                value: api.shop_api_path.clone(),
                reason: "must differ from admin_api_path".to_string(),
            });
        }
        require_non_empty("api_options.channel_token_key", &api.channel_token_key)?;

        let auth = &config.auth_options;
        require_non_empty("auth_options.auth_token_header_key", &auth.auth_token_header_key)?;
        require_non_empty("auth_options.superadmin_username", &auth.superadmin_username)?;
        validate_duration("auth_options.session_duration", &auth.session_duration)?;
        validate_duration(
            "auth_options.verification_token_duration",
            &auth.verification_token_duration,
        )?;
        require_unique(
            "auth_options.custom_permissions",
            auth.custom_permissions.iter().map(String::as_str),
        )?;

        let handler_lists: [(&str, &[HandlerRef]); 10] = [
            ("catalog_options.collection_filters", &config.catalog_options.collection_filters),
            ("promotion_options.promotion_conditions", &config.promotion_options.promotion_conditions),
            ("promotion_options.promotion_actions", &config.promotion_options.promotion_actions),
            ("shipping_options.shipping_eligibility_checkers", &config.shipping_options.shipping_eligibility_checkers),
            ("shipping_options.shipping_calculators", &config.shipping_options.shipping_calculators),
            ("shipping_options.fulfillment_handlers", &config.shipping_options.fulfillment_handlers),
            ("order_options.process", &config.order_options.process),
            ("payment_options.payment_method_handlers", &config.payment_options.payment_method_handlers),
            ("payment_options.payment_method_eligibility_checkers", &config.payment_options.payment_method_eligibility_checkers),
            ("payment_options.custom_payment_process", &config.payment_options.custom_payment_process),
        ];
        for (field, list) in handler_lists {
            validate_handlers(field, list)?;
        }

        validate_limit("order_options.order_items_limit", config.order_options.order_items_limit.into())?;
        validate_limit(
            "order_options.order_line_items_limit",
            config.order_options.order_line_items_limit.into(),
        )?;
        validate_limit("job_queue_options.polling_interval_ms", config.job_queue_options.polling_interval_ms)?;
        validate_limit("asset_options.upload_max_file_size", config.asset_options.upload_max_file_size)?;

        validate_db(config)?;
        validate_custom_fields(config)?;
        validate_plugins(config)?;

        if !is_language_code(&config.default_language_code) {
            return Err(ConfigError::InvalidLanguageCode(
                config.default_language_code.clone(),
            ));
        }

        if let Some(token) = &config.default_channel_token {
            require_non_empty("default_channel_token", token)?;
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn validate_api_path(field: &str, value: &str) -> Result<(), ConfigError> {
    let reason = if value.is_empty() {
        "must not be empty"
    } else if value.starts_with('/') {
        "must not start with '/'"
    } else if value.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidApiPath {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

fn validate_duration(field: &str, value: &str) -> Result<(), ConfigError> {
    if parse_duration(value).is_none() {
        return Err(ConfigError::InvalidDuration {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn validate_limit(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidLimit {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn require_unique<'a>(
    field: &str,
    values: impl IntoIterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(ConfigError::DuplicateCode {
                field: field.to_string(),
                code: value.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_handlers(field: &str, handlers: &[HandlerRef]) -> Result<(), ConfigError> {
    if handlers.iter().any(|handler| handler.code.trim().is_empty()) {
        return Err(ConfigError::EmptyField {
            field: format!("{field}[].code"),
        });
    }
    require_unique(field, handlers.iter().map(|handler| handler.code.as_str()))
}

fn validate_db(config: &RuntimeConfig) -> Result<(), ConfigError> {
    let db = &config.db_connection_options;
    let missing = |field: &str| ConfigError::MissingDbField {
        kind: db.kind.to_string(),
        field: field.to_string(),
    };

    if db.kind.is_networked() {
        if db.host.as_deref().map_or(true, |host| host.trim().is_empty()) {
            return Err(missing("host"));
        }
        match db.port {
            None => return Err(missing("port")),
            Some(0) => {
                return Err(ConfigError::InvalidPort {
                    field: "db_connection_options.port".to_string(),
                })
            }
            Some(_) => {}
        }
        if db.username.as_deref().map_or(true, |user| user.trim().is_empty()) {
            return Err(missing("username"));
        }
    }

    match db.kind {
        DatabaseType::Sqljs => {
            if db.auto_save && db.location.as_deref().map_or(true, str::is_empty) {
                return Err(missing("location"));
            }
        }
        _ => {
            if db.database.trim().is_empty() {
                return Err(missing("database"));
            }
        }
    }

    Ok(())
}

fn validate_custom_fields(config: &RuntimeConfig) -> Result<(), ConfigError> {
    for (entity, fields) in &config.custom_fields {
        let mut seen = HashSet::new();
        for field in fields {
            let invalid = |reason: &str| ConfigError::InvalidCustomField {
                entity: entity.clone(),
                name: field.name.clone(),
                reason: reason.to_string(),
            };

            if !is_identifier(&field.name) {
                return Err(invalid("name must be a valid identifier"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(invalid("name is defined more than once"));
            }
            match field.field_type {
                CustomFieldType::Relation => {
                    if field.entity.as_deref().map_or(true, str::is_empty) {
                        return Err(invalid("relation fields must name a target entity"));
                    }
                }
                _ => {
                    if field.entity.is_some() {
                        return Err(invalid("only relation fields may name a target entity"));
                    }
                }
            }
        }
    }
    Ok(())
}

fn validate_plugins(config: &RuntimeConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for plugin in &config.plugins {
        let name = plugin.name();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "plugins[].name".to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicatePlugin(name.to_string()));
        }
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `en`, `fil`, `pt_BR`.
fn is_language_code(code: &str) -> bool {
    let (language, region) = match code.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    };
    let language_ok =
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = region
        .map_or(true, |region| region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()));
    language_ok && region_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        CustomFieldConfig, PartialApiOptions, PartialAuthOptions, PartialCorsOptions,
        PartialDbConnectionOptions, PluginEntry, TokenMethod,
    };
    use serde_json::json;

    #[test]
    fn test_empty_partial_resolves_to_defaults() {
        let resolver = ConfigResolver::default();
        let config = resolver.resolve(&PartialConfig::default()).unwrap();
        assert_eq!(&config, resolver.defaults());
    }

    #[test]
    fn test_nested_fields_merge_individually() {
        let partial = PartialConfig {
            api_options: Some(PartialApiOptions {
                port: Some(4000),
                cors: Some(PartialCorsOptions {
                    origins: Some(vec!["https://shop.example".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = ConfigResolver::default().resolve(&partial).unwrap();

        assert_eq!(config.api_options.port, 4000, "Override should win");
        assert_eq!(config.api_options.admin_api_path, "admin-api", "Default should persist");
        assert_eq!(config.api_options.cors.origins, vec!["https://shop.example"]);
        assert!(config.api_options.cors.enabled, "Sibling of nested override should persist");
    }

    #[test]
    fn test_disable_auth_is_not_an_error() {
        let partial = PartialConfig {
            auth_options: Some(PartialAuthOptions {
                disable_auth: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = ConfigResolver::default().resolve(&partial).unwrap();
        assert!(config.auth_options.disable_auth);
        assert_eq!(config.auth_options.token_method, TokenMethod::Cookie);
    }

    #[test]
    fn test_plugins_are_replaced_not_concatenated() {
        let defaults = RuntimeConfig {
            plugins: vec![PluginEntry::bare("default-search")],
            ..Default::default()
        };
        let partial = PartialConfig {
            plugins: Some(vec![
                PluginEntry::bare("default-job-queue"),
                PluginEntry::configured("admin-ui", json!({ "port": 5001 })),
            ]),
            ..Default::default()
        };

        let config = ConfigResolver::new(defaults).resolve(&partial).unwrap();
        let names: Vec<&str> = config.plugins.iter().map(PluginEntry::name).collect();
        assert_eq!(names, ["default-job-queue", "admin-ui"]);
    }

    #[test]
    fn test_wrong_type_names_the_field() {
        let partial: PartialConfig =
            serde_json::from_value(json!({ "api_options": { "port": 8080 } })).unwrap();
        assert!(ConfigResolver::default().resolve(&partial).is_ok());

        let figment_err = Figment::new()
            .merge(Serialized::defaults(json!({ "api_options": { "port": "eighty" } })))
            .extract::<PartialConfig>()
            .unwrap_err();
        assert!(figment_err.to_string().contains("port"));
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = RuntimeConfig::default();
        config.api_options.port = 0;

        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidPort { .. }
        ));
    }

    #[test]
    fn test_validate_api_paths() {
        let mut config = RuntimeConfig::default();
        config.api_options.admin_api_path = "/admin-api".to_string();
        match ConfigResolver::validate(&config).unwrap_err() {
            ConfigError::InvalidApiPath { field, .. } => {
                assert_eq!(field, "api_options.admin_api_path");
            }
            other => panic!("Expected InvalidApiPath error, got {other:?}"),
        }

        let mut config = RuntimeConfig::default();
        config.api_options.shop_api_path = "admin-api".to_string();
        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidApiPath { .. }
        ));
    }

    #[test]
    fn test_validate_session_duration() {
        let mut config = RuntimeConfig::default();
        config.auth_options.session_duration = "forever".to_string();

        match ConfigResolver::validate(&config).unwrap_err() {
            ConfigError::InvalidDuration { field, value } => {
                assert_eq!(field, "auth_options.session_duration");
                assert_eq!(value, "forever");
            }
            other => panic!("Expected InvalidDuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_handler_codes() {
        let mut config = RuntimeConfig::default();
        config.shipping_options.fulfillment_handlers =
            vec![HandlerRef::new("manual-fulfillment"), HandlerRef::new("manual-fulfillment")];

        match ConfigResolver::validate(&config).unwrap_err() {
            ConfigError::DuplicateCode { field, code } => {
                assert_eq!(field, "shipping_options.fulfillment_handlers");
                assert_eq!(code, "manual-fulfillment");
            }
            other => panic!("Expected DuplicateCode error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_handler_code() {
        let mut config = RuntimeConfig::default();
        config.payment_options.payment_method_handlers = vec![HandlerRef::new(" ")];

        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::EmptyField { .. }
        ));
    }

    #[test]
    fn test_validate_networked_db_requires_host() {
        let partial = PartialConfig {
            db_connection_options: Some(PartialDbConnectionOptions {
                kind: Some(DatabaseType::Postgres),
                ..Default::default()
            }),
            ..Default::default()
        };
        let resolver = ConfigResolver::new(RuntimeConfig::defaults_for(DatabaseType::BetterSqlite3));

        match resolver.resolve(&partial).unwrap_err() {
            ConfigError::MissingDbField { kind, field } => {
                assert_eq!(kind, "postgres");
                assert_eq!(field, "host");
            }
            other => panic!("Expected MissingDbField error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_file_db_requires_database() {
        let mut config = RuntimeConfig::defaults_for(DatabaseType::BetterSqlite3);
        config.db_connection_options.database = String::new();

        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::MissingDbField { .. }
        ));

        let config = RuntimeConfig::defaults_for(DatabaseType::Sqljs);
        assert!(ConfigResolver::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_custom_fields() {
        let mut config = RuntimeConfig::default();
        config.custom_fields.insert(
            "Channel".to_string(),
            vec![CustomFieldConfig::new("logo", CustomFieldType::Relation)],
        );
        match ConfigResolver::validate(&config).unwrap_err() {
            ConfigError::InvalidCustomField { entity, name, reason } => {
                assert_eq!(entity, "Channel");
                assert_eq!(name, "logo");
                assert!(reason.contains("target entity"));
            }
            other => panic!("Expected InvalidCustomField error, got {other:?}"),
        }

        config.custom_fields.insert(
            "Channel".to_string(),
            vec![
                CustomFieldConfig::relation("logo", "Asset"),
                CustomFieldConfig::new("logo", CustomFieldType::String),
            ],
        );
        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidCustomField { .. }
        ));

        config.custom_fields.insert(
            "Channel".to_string(),
            vec![CustomFieldConfig::new("2fast", CustomFieldType::Int)],
        );
        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidCustomField { .. }
        ));
    }

    #[test]
    fn test_validate_duplicate_plugins() {
        let mut config = RuntimeConfig::default();
        config.plugins = vec![
            PluginEntry::bare("default-search"),
            PluginEntry::configured("default-search", json!({})),
        ];

        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::DuplicatePlugin(name) if name == "default-search"
        ));
    }

    #[test]
    fn test_validate_language_code() {
        assert!(is_language_code("en"));
        assert!(is_language_code("fil"));
        assert!(is_language_code("pt_BR"));
        assert!(!is_language_code("EN"));
        assert!(!is_language_code("english"));
        assert!(!is_language_code("pt_br"));

        let mut config = RuntimeConfig::default();
        config.default_language_code = "english".to_string();
        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidLanguageCode(_)
        ));
    }

    #[test]
    fn test_validate_zero_limits() {
        let mut config = RuntimeConfig::default();
        config.order_options.order_items_limit = 0;

        assert!(matches!(
            ConfigResolver::validate(&config).unwrap_err(),
            ConfigError::InvalidLimit { value: 0, .. }
        ));
    }
}
