//! Vehicle storage backends.
//!
//! [`VehicleStore`] is the seam between the service and the database. One
//! implementation exists per [`Provider`]; [`connect`] picks it from the
//! configuration so handlers never know which backend they talk to.

mod postgres;
mod sqlite;

pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use sqlx::migrate::MigrateError;
use tracing::warn;

use crate::{
    config::DatabaseConfig,
    errors::StartupError,
    models::{NewVehicle, Vehicle},
    provider::Provider,
};

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Store handle shared by request handlers.
pub type SharedStore = Arc<dyn VehicleStore>;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    fn provider(&self) -> Provider;

    /// Applies the provider's pending migrations.
    async fn migrate(&self) -> Result<(), MigrateError>;

    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// Inserts all vehicles in one transaction. Returns the number of rows written.
    async fn insert_batch(&self, vehicles: &[NewVehicle]) -> Result<u64, sqlx::Error>;

    /// Returns up to `limit` vehicles with the smallest ids, ascending.
    async fn first_by_id(&self, limit: i64) -> Result<Vec<Vehicle>, sqlx::Error>;
}

/// Connects to the backend named by `config.provider`.
pub async fn connect(config: &DatabaseConfig) -> Result<SharedStore, StartupError> {
    let store: SharedStore = match config.provider {
        Provider::Sqlite => Arc::new(SqliteStore::connect(config).await?),
        Provider::Postgres => Arc::new(PostgresStore::connect(config).await?),
    };
    Ok(store)
}

/// Errors worth another connection attempt: the backend may still be coming up.
fn is_transient(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut
    )
}

/// Runs `connect` until it succeeds, fails permanently, or
/// `config.connect_attempts` is exhausted, doubling the delay between tries.
async fn connect_with_retry<P, F, Fut>(
    config: &DatabaseConfig,
    mut connect: F,
) -> Result<P, StartupError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<P, sqlx::Error>>,
{
    let max_attempts = config.connect_attempts.max(1);
    let mut delay = INITIAL_BACKOFF;
    let mut attempt = 1;

    loop {
        match connect().await {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < max_attempts && is_transient(&e) => {
                warn!(
                    provider = %config.provider,
                    attempt,
                    max_attempts,
                    "Database unavailable ({e}), retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(MAX_BACKOFF);
                attempt += 1;
            }
            Err(source) => {
                return Err(StartupError::Connect {
                    provider: config.provider,
                    attempts: attempt,
                    source,
                });
            }
        }
    }
}
