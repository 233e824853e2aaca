//! Storage provider selection.

use std::{fmt, str::FromStr};

use sqlx::migrate::Migrator;

use crate::config::ConfigError;

static SQLITE_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/postgres");

/// Relational backend the service stores vehicles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Sqlite,
    Postgres,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Sqlite, Provider::Postgres];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Sqlite => "sqlite",
            Provider::Postgres => "postgres",
        }
    }

    /// Configuration key holding this provider's connection string.
    pub fn connection_key(&self) -> &'static str {
        match self {
            Provider::Sqlite => "SQLITE_DATABASE_URL",
            Provider::Postgres => "POSTGRES_DATABASE_URL",
        }
    }

    /// Directory, relative to the crate root, holding this provider's migrations.
    pub fn migrations_dir(&self) -> &'static str {
        match self {
            Provider::Sqlite => "migrations/sqlite",
            Provider::Postgres => "migrations/postgres",
        }
    }

    /// Embedded migration set for this provider.
    pub fn migrator(&self) -> &'static Migrator {
        match self {
            Provider::Sqlite => &SQLITE_MIGRATIONS,
            Provider::Postgres => &POSTGRES_MIGRATIONS,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Provider::Sqlite),
            "postgres" | "postgresql" => Ok(Provider::Postgres),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}
