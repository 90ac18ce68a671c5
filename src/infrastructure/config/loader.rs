use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::{Dict, Map, Value};
use figment::{Figment, Metadata, Profile, Provider};
use std::path::{Path, PathBuf};

use crate::domain::errors::ConfigError;
use crate::domain::models::PartialConfig;
use crate::domain::ports::WarnLogger;
use crate::infrastructure::config::dev::development_config;
use crate::services::{ConfigResolver, ConfigService};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "STOREFRONT_";
/// Project configuration file.
pub const CONFIG_FILE: &str = "storefront.yaml";
/// Optional local overrides, kept out of version control.
pub const LOCAL_CONFIG_FILE: &str = "storefront.local.yaml";
/// Names the config file for the CLI. Not a configuration key.
pub const CONFIG_PATH_ENV_VAR: &str = "STOREFRONT_CONFIG";

/// Configuration loader with hierarchical merging
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    config_file: Option<PathBuf>,
    development: bool,
}

impl ConfigLoader {
    /// Loader reading `storefront.yaml` from the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for the default config files in `dir` instead of the current directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Use an explicit config file. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Start from the development settings instead of an empty partial.
    #[must_use]
    pub const fn with_development_defaults(mut self, enabled: bool) -> Self {
        self.development = enabled;
        self
    }

    /// Build the layered figment.
    ///
    /// Precedence (lowest to highest):
    /// 1. Development settings (only with `with_development_defaults(true)`)
    /// 2. `storefront.yaml`, or the explicit config file
    /// 3. `storefront.local.yaml` (optional)
    /// 4. Environment variables (`STOREFRONT_*`, `__` separates nesting levels)
    pub fn figment(&self) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new();

        if self.development {
            figment = figment.merge(Serialized::defaults(development_config()));
        }

        let project_file = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                path.clone()
            }
            None => self.base_dir.join(CONFIG_FILE),
        };

        Ok(figment
            .merge(Yaml::file(project_file))
            .merge(Yaml::file(self.base_dir.join(LOCAL_CONFIG_FILE)))
            .merge(RawEnv::prefixed(ENV_PREFIX)))
    }

    /// Collect every layer into a single partial configuration.
    pub fn load_partial(&self) -> Result<PartialConfig, ConfigError> {
        let partial: PartialConfig = self.figment()?.extract_lossy()?;
        tracing::debug!(
            development = self.development,
            config_file = ?self.config_file,
            "configuration layers loaded"
        );
        Ok(partial)
    }

    /// Load the layers and construct the configuration service.
    ///
    /// Database defaults follow the `DB` environment variable.
    pub fn load_service(&self, logger: &dyn WarnLogger) -> Result<ConfigService, ConfigError> {
        let partial = self.load_partial()?;
        ConfigService::new(&ConfigResolver::from_env(), &partial, logger)
    }

    /// Load a partial from a single YAML file, without other layers.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<PartialConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Ok(Figment::from(Yaml::file(path)).extract_lossy()?)
    }
}

/// Environment provider that keeps values as written.
///
/// figment's `Env` parses `12345` into a number and `true` into a bool, which
/// then fails to extract into string fields such as passwords. Here every
/// value stays a string, except `[..]` and `{..}` which are parsed as arrays
/// and dicts. Numeric and boolean fields are recovered by `extract_lossy`.
struct RawEnv {
    env: Env,
}

impl RawEnv {
    fn prefixed(prefix: &str) -> Self {
        Self {
            env: Env::prefixed(prefix).ignore(&["config"]).split("__"),
        }
    }
}

impl Provider for RawEnv {
    fn metadata(&self) -> Metadata {
        self.env.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.env.iter() {
            let value = if raw.trim_start().starts_with(['[', '{']) {
                raw.parse::<Value>().unwrap_or_else(|never| match never {})
            } else {
                Value::from(raw)
            };
            if let Value::Dict(_, nested) = figment::util::nest(key.as_str(), value) {
                merge_dicts(&mut dict, nested);
            }
        }

        Ok(Map::from([(Profile::Default, dict)]))
    }
}

fn merge_dicts(into: &mut Dict, from: Dict) {
    for (key, value) in from {
        match (into.get_mut(&key), value) {
            (Some(Value::Dict(_, existing)), Value::Dict(_, incoming)) => {
                merge_dicts(existing, incoming);
            }
            (_, value) => {
                into.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DatabaseType, Secret, TokenMethod, DB_ENV_VAR};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_files_yield_empty_partial() {
        let dir = TempDir::new().unwrap();
        temp_env::with_vars_unset(["STOREFRONT_API_OPTIONS__PORT"], || {
            let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();
            assert_eq!(partial, PartialConfig::default());
        });
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let result = ConfigLoader::new().with_file("/nonexistent/storefront.yaml").load_partial();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_hierarchical_merging() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            CONFIG_FILE,
            "api_options:\n  port: 4000\n  admin_api_path: backoffice\nauth_options:\n  token_method: bearer\n",
        );
        write(&dir, LOCAL_CONFIG_FILE, "api_options:\n  port: 5000\n");

        temp_env::with_vars_unset(["STOREFRONT_API_OPTIONS__PORT"], || {
            let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();
            let api = partial.api_options.unwrap();

            assert_eq!(api.port, Some(5000), "Local override should win");
            assert_eq!(api.admin_api_path.as_deref(), Some("backoffice"), "Base value should persist");
            assert_eq!(
                partial.auth_options.and_then(|auth| auth.token_method),
                Some(TokenMethod::Bearer)
            );
        });
    }

    #[test]
    fn test_env_override() {
        let dir = TempDir::new().unwrap();
        write(&dir, CONFIG_FILE, "api_options:\n  port: 4000\n");

        temp_env::with_vars(
            [
                ("STOREFRONT_API_OPTIONS__PORT", Some("6000")),
                ("STOREFRONT_DB_CONNECTION_OPTIONS__PASSWORD", Some("from-env")),
            ],
            || {
                let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();
                assert_eq!(partial.api_options.and_then(|api| api.port), Some(6000));
                assert_eq!(
                    partial
                        .db_connection_options
                        .and_then(|db| db.password)
                        .map(|secret| secret.expose().to_string()),
                    Some("from-env".to_string())
                );
            },
        );
    }

    #[test]
    fn test_env_secrets_keep_their_text() {
        let dir = TempDir::new().unwrap();

        temp_env::with_vars(
            [
                ("STOREFRONT_DB_CONNECTION_OPTIONS__PASSWORD", Some("0012345")),
                ("STOREFRONT_DB_CONNECTION_OPTIONS__DATABASE", Some("2024")),
                ("STOREFRONT_AUTH_OPTIONS__COOKIE_SECRET", Some("true")),
                ("STOREFRONT_DEFAULT_CHANNEL_TOKEN", Some("42")),
            ],
            || {
                let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();
                let db = partial.db_connection_options.unwrap();
                let auth = partial.auth_options.unwrap();

                assert_eq!(db.password.as_ref().map(Secret::expose), Some("0012345"));
                assert_eq!(db.database.as_deref(), Some("2024"));
                assert_eq!(auth.cookie_secret.as_ref().map(Secret::expose), Some("true"));
                assert_eq!(partial.default_channel_token.as_deref(), Some("42"));
            },
        );
    }

    #[test]
    fn test_env_numbers_bools_and_lists_still_parse() {
        let dir = TempDir::new().unwrap();

        temp_env::with_vars(
            [
                ("STOREFRONT_API_OPTIONS__PORT", Some("6100")),
                ("STOREFRONT_AUTH_OPTIONS__DISABLE_AUTH", Some("true")),
                ("STOREFRONT_DB_CONNECTION_OPTIONS__MIGRATIONS", Some("[migrations, seeds]")),
            ],
            || {
                let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();

                assert_eq!(partial.api_options.and_then(|api| api.port), Some(6100));
                assert_eq!(partial.auth_options.and_then(|auth| auth.disable_auth), Some(true));
                assert_eq!(
                    partial.db_connection_options.and_then(|db| db.migrations),
                    Some(vec!["migrations".to_string(), "seeds".to_string()])
                );
            },
        );
    }

    #[test]
    fn test_env_non_numeric_port_fails() {
        let dir = TempDir::new().unwrap();
        temp_env::with_var("STOREFRONT_API_OPTIONS__PORT", Some("eighty"), || {
            let err = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap_err();
            assert!(matches!(err, ConfigError::Extract(_)));
        });
    }

    #[test]
    fn test_config_path_variable_is_not_a_key() {
        let dir = TempDir::new().unwrap();
        temp_env::with_var(CONFIG_PATH_ENV_VAR, Some("elsewhere.yaml"), || {
            let partial = ConfigLoader::new().in_dir(dir.path()).load_partial().unwrap();
            assert_eq!(partial, PartialConfig::default());
        });
    }

    #[test]
    fn test_unknown_key_fails_with_key_name() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.yaml", "auth_options:\n  disable_authentication: true\n");

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Extract(_)));
        assert!(err.to_string().contains("disable_authentication"));
    }

    #[test]
    fn test_development_layer_is_lowest() {
        let dir = TempDir::new().unwrap();
        write(&dir, CONFIG_FILE, "auth_options:\n  token_method: cookie\n");

        temp_env::with_vars_unset(["STOREFRONT_AUTH_OPTIONS__TOKEN_METHOD"], || {
            let partial = ConfigLoader::new()
                .in_dir(dir.path())
                .with_development_defaults(true)
                .load_partial()
                .unwrap();
            let auth = partial.auth_options.unwrap();

            assert_eq!(auth.token_method, Some(TokenMethod::Cookie), "File should beat dev layer");
            assert_eq!(auth.session_duration.as_deref(), Some("1y"), "Dev value should persist");
            assert_eq!(partial.plugins.map(|plugins| plugins.len()), Some(5));
        });
    }

    #[test]
    fn test_load_service_uses_db_selector() {
        let dir = TempDir::new().unwrap();
        struct Silent;
        impl WarnLogger for Silent {
            fn warn(&self, _message: &str) {}
        }

        temp_env::with_var(DB_ENV_VAR, Some("sqlite"), || {
            let service = ConfigLoader::new().in_dir(dir.path()).load_service(&Silent).unwrap();
            assert_eq!(service.db_connection_options().kind, DatabaseType::BetterSqlite3);
        });
    }
}
