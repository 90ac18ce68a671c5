//! Database connection options and the `DB` environment selector.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::secret::Secret;

/// Environment variable choosing the development database.
pub const DB_ENV_VAR: &str = "DB";

/// Database driver the ORM connects with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseType {
    /// MySQL / MariaDB
    #[serde(rename = "mariadb")]
    Mariadb,
    /// PostgreSQL
    #[serde(rename = "postgres")]
    Postgres,
    /// SQLite file database
    #[serde(rename = "better-sqlite3")]
    BetterSqlite3,
    /// In-memory SQLite persisted to a file
    #[serde(rename = "sqljs")]
    Sqljs,
}

impl DatabaseType {
    /// Map a `DB` value to a driver. `None` means the value was not recognized.
    pub fn from_selector(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Self::Mariadb),
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite" | "better-sqlite3" => Some(Self::BetterSqlite3),
            "sqljs" => Some(Self::Sqljs),
            _ => None,
        }
    }

    /// Resolve the driver from the `DB` environment variable.
    ///
    /// Unset selects MySQL. Unrecognized values also fall back to MySQL,
    /// with a warning.
    pub fn from_env() -> Self {
        let kind = match std::env::var(DB_ENV_VAR) {
            Ok(value) => Self::from_selector(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unrecognized {DB_ENV_VAR} value, falling back to mysql");
                Self::Mariadb
            }),
            Err(_) => Self::Mariadb,
        };
        tracing::info!("Using {} connection", kind.selector());
        kind
    }

    /// The `DB` value that selects this driver.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Mariadb => "mysql",
            Self::Postgres => "postgres",
            Self::BetterSqlite3 => "sqlite",
            Self::Sqljs => "sqljs",
        }
    }

    /// Whether the driver talks to a server over the network.
    pub const fn is_networked(self) -> bool {
        matches!(self, Self::Mariadb | Self::Postgres)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mariadb => "mariadb",
            Self::Postgres => "postgres",
            Self::BetterSqlite3 => "better-sqlite3",
            Self::Sqljs => "sqljs",
        };
        f.write_str(name)
    }
}

/// Connection options handed to the ORM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DbConnectionOptions {
    /// Driver
    #[serde(rename = "type")]
    pub kind: DatabaseType,

    /// Auto-create the schema from entity metadata
    pub synchronize: bool,

    /// Log every query
    pub logging: bool,

    /// Migration file globs
    pub migrations: Vec<String>,

    /// Server host (networked drivers)
    pub host: Option<String>,

    /// Server port (networked drivers)
    pub port: Option<u16>,

    /// Login user (networked drivers)
    pub username: Option<String>,

    /// Login password, only ever supplied through the environment
    pub password: Option<Secret>,

    /// Database name, or file path for file databases
    pub database: String,

    /// Persistence file for sqljs
    pub location: Option<String>,

    /// Persist sqljs changes automatically
    pub auto_save: bool,
}

impl DbConnectionOptions {
    /// Connection defaults for a driver.
    pub fn for_type(kind: DatabaseType) -> Self {
        match kind {
            DatabaseType::Postgres => Self {
                synchronize: true,
                host: Some("127.0.0.1".to_string()),
                port: Some(5432),
                username: Some("admin".to_string()),
                database: "storefront-dev".to_string(),
                ..Self::base(kind)
            },
            DatabaseType::BetterSqlite3 => Self {
                synchronize: false,
                database: "storefront.sqlite".to_string(),
                ..Self::base(kind)
            },
            DatabaseType::Sqljs => Self {
                auto_save: true,
                location: Some("storefront.sqlite".to_string()),
                ..Self::base(kind)
            },
            DatabaseType::Mariadb => Self {
                synchronize: true,
                host: Some("127.0.0.1".to_string()),
                port: Some(3306),
                username: Some("root".to_string()),
                database: "storefront-dev".to_string(),
                ..Self::base(kind)
            },
        }
    }

    fn base(kind: DatabaseType) -> Self {
        Self {
            kind,
            synchronize: false,
            logging: false,
            migrations: vec![],
            host: None,
            port: None,
            username: None,
            password: None,
            database: String::new(),
            location: None,
            auto_save: false,
        }
    }
}

impl Default for DbConnectionOptions {
    fn default() -> Self {
        Self::for_type(DatabaseType::Mariadb)
    }
}
