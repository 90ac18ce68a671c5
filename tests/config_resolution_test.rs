//! End-to-end resolution: files and environment in, `ConfigService` out.

mod common;

use common::{temp_dir, write_file, RecordingLogger, ISOLATED_VARS};
use serde_json::json;
use storefront_config::domain::models::{
    DatabaseType, PartialAuthOptions, PartialConfig, TokenMethod,
};
use storefront_config::infrastructure::config::{ConfigLoader, CONFIG_FILE};
use storefront_config::{
    ConfigError, ConfigResolver, ConfigService, PluginEntry, AUTH_DISABLED_WARNING,
};

#[test]
fn test_present_fields_override_and_absent_fields_default() {
    let dir = temp_dir();
    write_file(
        &dir,
        CONFIG_FILE,
        "api_options:\n  port: 4100\n  cors:\n    origins: [\"https://shop.example\"]\n",
    );

    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let logger = RecordingLogger::default();
        let service = ConfigLoader::new().in_dir(dir.path()).load_service(&logger).unwrap();
        let defaults = ConfigResolver::default();

        assert_eq!(service.api_options().port, 4100);
        assert_eq!(service.api_options().cors.origins, vec!["https://shop.example"]);
        assert_eq!(service.api_options().admin_api_path, defaults.defaults().api_options.admin_api_path);
        assert_eq!(service.order_options(), &defaults.defaults().order_options);
        assert!(logger.warnings().is_empty());
    });
}

#[test]
fn test_disable_auth_warns_and_keeps_token_method() {
    let dir = temp_dir();
    write_file(&dir, CONFIG_FILE, "auth_options:\n  disable_auth: true\n");

    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let logger = RecordingLogger::default();
        let service = ConfigLoader::new().in_dir(dir.path()).load_service(&logger).unwrap();

        assert!(service.auth_options().disable_auth);
        assert_eq!(service.auth_options().token_method, TokenMethod::Cookie);
        assert_eq!(logger.warnings(), vec![AUTH_DISABLED_WARNING.to_string()]);
    });
}

#[test]
fn test_db_postgres_selects_postgres_defaults() {
    let dir = temp_dir();

    temp_env::with_vars_unset(ISOLATED_VARS, || {
        temp_env::with_vars(
            [
                ("DB", Some("postgres")),
                ("STOREFRONT_DB_CONNECTION_OPTIONS__PASSWORD", Some("pg-from-env")),
            ],
            || {
                let service = ConfigLoader::new()
                    .in_dir(dir.path())
                    .load_service(&RecordingLogger::default())
                    .unwrap();
                let db = service.db_connection_options();

                assert_eq!(db.kind, DatabaseType::Postgres);
                assert_eq!(db.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(db.port, Some(5432));
                assert_eq!(db.username.as_deref(), Some("admin"));
                assert_eq!(db.password.as_ref().map(|p| p.expose()), Some("pg-from-env"));
            },
        );
    });
}

#[test]
fn test_without_env_password_is_absent() {
    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let service = ConfigLoader::new()
            .in_dir(temp_dir().path())
            .load_service(&RecordingLogger::default())
            .unwrap();
        assert!(service.db_connection_options().password.is_none());
        assert!(service.auth_options().superadmin_password.is_none());
    });
}

#[test]
fn test_plugins_replace_default_list_in_order() {
    let dir = temp_dir();
    write_file(
        &dir,
        CONFIG_FILE,
        "plugins:\n  - default-search\n  - name: admin-ui\n    options:\n      port: 5001\n",
    );

    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let service = ConfigLoader::new()
            .in_dir(dir.path())
            .load_service(&RecordingLogger::default())
            .unwrap();

        assert_eq!(
            service.plugins(),
            &[
                PluginEntry::bare("default-search"),
                PluginEntry::configured("admin-ui", json!({ "port": 5001 })),
            ]
        );
    });
}

#[test]
fn test_two_services_equal_but_independent() {
    let resolver = ConfigResolver::default();
    let logger = RecordingLogger::default();
    let partial = PartialConfig {
        auth_options: Some(PartialAuthOptions {
            token_method: Some(TokenMethod::Bearer),
            ..Default::default()
        }),
        ..Default::default()
    };

    let first = ConfigService::new(&resolver, &partial, &logger).unwrap();
    let second = ConfigService::new(&resolver, &partial, &logger).unwrap();

    assert_eq!(first.runtime(), second.runtime());
    assert!(!first.shares_instance_with(&second));
    assert!(first.shares_instance_with(&first.clone()));
}

#[test]
fn test_malformed_value_names_the_key() {
    let dir = temp_dir();
    write_file(&dir, CONFIG_FILE, "api_options:\n  port: not-a-port\n");

    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let err = ConfigLoader::new()
            .in_dir(dir.path())
            .load_service(&RecordingLogger::default())
            .unwrap_err();

        assert!(matches!(err, ConfigError::Extract(_)));
        assert!(err.to_string().contains("port"));
    });
}

#[test]
fn test_development_layer_resolves() {
    temp_env::with_vars_unset(ISOLATED_VARS, || {
        let service = ConfigLoader::new()
            .in_dir(temp_dir().path())
            .with_development_defaults(true)
            .load_service(&RecordingLogger::default())
            .unwrap();

        assert_eq!(service.auth_options().token_method, TokenMethod::Bearer);
        assert_eq!(service.plugins().first().map(PluginEntry::name), Some("asset-server"));
        assert_eq!(service.plugins().last().map(PluginEntry::name), Some("admin-ui"));
    });
}
