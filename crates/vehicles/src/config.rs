//! Process configuration, read once at startup.
//!
//! Values come from the environment. A `.env` file in the working directory
//! is loaded first when present, see `main.rs`.

use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::provider::Provider;

pub const PROVIDER_KEY: &str = "PROVIDER";
pub const PORT_KEY: &str = "PORT";
pub const MAX_CONNECTIONS_KEY: &str = "DB_MAX_CONNECTIONS";
pub const CONNECT_ATTEMPTS_KEY: &str = "DB_CONNECT_ATTEMPTS";
pub const ACQUIRE_TIMEOUT_KEY: &str = "DB_ACQUIRE_TIMEOUT_SECS";
pub const SEED_KEY: &str = "SEED";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown provider '{0}' (expected one of: sqlite, postgres)")]
    UnknownProvider(String),

    #[error("Missing connection string for provider '{provider}': set {key}")]
    MissingConnectionString { provider: Provider, key: &'static str },

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Connection settings for the selected provider.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub provider: Provider,
    pub url: String,
    pub max_connections: u32,
    pub connect_attempts: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub port: u16,
    /// Fixed RNG seed for reproducible seed data.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match get(PROVIDER_KEY) {
            Some(name) => name.parse()?,
            None => Provider::default(),
        };

        let key = provider.connection_key();
        let url = get(key).ok_or(ConfigError::MissingConnectionString { provider, key })?;

        let database = DatabaseConfig {
            provider,
            url,
            max_connections: parse_or(
                get(MAX_CONNECTIONS_KEY),
                MAX_CONNECTIONS_KEY,
                DEFAULT_MAX_CONNECTIONS,
            )?,
            connect_attempts: parse_or(
                get(CONNECT_ATTEMPTS_KEY),
                CONNECT_ATTEMPTS_KEY,
                DEFAULT_CONNECT_ATTEMPTS,
            )?,
            acquire_timeout: Duration::from_secs(parse_or(
                get(ACQUIRE_TIMEOUT_KEY),
                ACQUIRE_TIMEOUT_KEY,
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            database,
            port: parse_or(get(PORT_KEY), PORT_KEY, DEFAULT_PORT)?,
            seed: get(SEED_KEY).map(|v| parse_value(&v, SEED_KEY)).transpose()?,
        })
    }
}

fn parse_value<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |v| parse_value(&v, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_sqlite() {
        let cfg = config(&[("SQLITE_DATABASE_URL", "sqlite://vehicles.db")]).unwrap();

        assert_eq!(cfg.database.provider, Provider::Sqlite);
        assert_eq!(cfg.database.url, "sqlite://vehicles.db");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_postgres_uses_postgres_key() {
        let cfg = config(&[
            ("PROVIDER", "postgres"),
            ("SQLITE_DATABASE_URL", "sqlite://vehicles.db"),
            ("POSTGRES_DATABASE_URL", "postgres://localhost/vehicles"),
        ])
        .unwrap();

        assert_eq!(cfg.database.provider, Provider::Postgres);
        assert_eq!(cfg.database.url, "postgres://localhost/vehicles");
    }

    #[test]
    fn test_empty_provider_means_default() {
        let cfg = config(&[("PROVIDER", ""), ("SQLITE_DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(cfg.database.provider, Provider::Sqlite);
    }

    #[test]
    fn test_missing_connection_string() {
        let err = config(&[
            ("PROVIDER", "postgres"),
            ("SQLITE_DATABASE_URL", "sqlite://vehicles.db"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingConnectionString {
                provider: Provider::Postgres,
                key: "POSTGRES_DATABASE_URL"
            }
        ));
    }

    #[test]
    fn test_unknown_provider() {
        let err = config(&[("PROVIDER", "oracle")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(_)));
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let cfg = config(&[
            ("SQLITE_DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "1"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "30"),
            ("SEED", "42"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.database.max_connections, 1);
        assert_eq!(cfg.database.acquire_timeout, Duration::from_secs(30));
        assert_eq!(cfg.seed, Some(42));

        let err = config(&[("SQLITE_DATABASE_URL", "sqlite::memory:"), ("PORT", "http")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = config(&[
            ("SQLITE_DATABASE_URL", "sqlite::memory:"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "-1"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "DB_ACQUIRE_TIMEOUT_SECS",
                ..
            }
        ));
    }
}
