//! # Store Configuration
//!
//! Cart store settings, loaded from environment variables with defaults.
//!
//! | Variable                        | Default          |
//! |---------------------------------|------------------|
//! | `STOREFRONT_DB_PATH`            | `storefront.db`  |
//! | `STOREFRONT_DB_MAX_CONNECTIONS` | `5`              |
//! | `STOREFRONT_DB_RUN_MIGRATIONS`  | `true`           |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::pool::DbConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Pool size.
    pub max_connections: u32,

    /// Apply pending migrations when connecting.
    pub run_migrations: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            database_path: PathBuf::from("storefront.db"),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StoreConfig::default();

        Ok(StoreConfig {
            database_path: lookup("STOREFRONT_DB_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            max_connections: match lookup("STOREFRONT_DB_MAX_CONNECTIONS") {
                Some(raw) => parse_pool_size("STOREFRONT_DB_MAX_CONNECTIONS", &raw)?,
                None => defaults.max_connections,
            },

            run_migrations: match lookup("STOREFRONT_DB_RUN_MIGRATIONS") {
                Some(raw) => parse_bool("STOREFRONT_DB_RUN_MIGRATIONS", &raw)?,
                None => defaults.run_migrations,
            },
        })
    }
}

impl From<StoreConfig> for DbConfig {
    fn from(config: StoreConfig) -> Self {
        DbConfig::file(config.database_path)
            .max_connections(config.max_connections)
            .run_migrations(config.run_migrations)
    }
}

fn parse_pool_size(name: &str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid(name, raw)),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, raw)),
    }
}

fn invalid(name: &str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::pool::Location;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_DB_PATH", "/var/lib/shop/carts.db"),
            ("STOREFRONT_DB_MAX_CONNECTIONS", "12"),
            ("STOREFRONT_DB_RUN_MIGRATIONS", "off"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/shop/carts.db"));
        assert_eq!(config.max_connections, 12);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_values() {
        let err = StoreConfig::from_lookup(lookup_from(&[(
            "STOREFRONT_DB_MAX_CONNECTIONS",
            "lots",
        )]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for STOREFRONT_DB_MAX_CONNECTIONS: 'lots'"
        );

        assert!(StoreConfig::from_lookup(lookup_from(&[(
            "STOREFRONT_DB_MAX_CONNECTIONS",
            "0"
        )]))
        .is_err());

        assert!(StoreConfig::from_lookup(lookup_from(&[(
            "STOREFRONT_DB_RUN_MIGRATIONS",
            "maybe"
        )]))
        .is_err());
    }

    #[test]
    fn test_into_db_config() {
        let config = StoreConfig {
            database_path: PathBuf::from("carts.db"),
            max_connections: 3,
            run_migrations: false,
        };
        let db_config: DbConfig = config.into();

        assert_eq!(db_config.location, Location::File(PathBuf::from("carts.db")));
        assert_eq!(db_config.max_connections, 3);
        assert!(!db_config.run_migrations);
    }
}
