use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::{VehicleStore, connect_with_retry};
use crate::{
    config::DatabaseConfig,
    errors::StartupError,
    models::{NewVehicle, Vehicle},
    provider::Provider,
};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `config.url`, creating the file if needed.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        let pool = connect_with_retry(config, || async {
            let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect_with(options)
                .await
        })
        .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl VehicleStore for SqliteStore {
    fn provider(&self) -> Provider {
        Provider::Sqlite
    }

    async fn migrate(&self) -> Result<(), MigrateError> {
        Provider::Sqlite.migrator().run(&self.pool).await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_batch(&self, vehicles: &[NewVehicle]) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for vehicle in vehicles {
            inserted += sqlx::query(
                r#"
                INSERT INTO vehicles (vehicle_identification_number, model, vehicle_type, fuel)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&vehicle.vehicle_identification_number)
            .bind(&vehicle.model)
            .bind(&vehicle.vehicle_type)
            .bind(&vehicle.fuel)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn first_by_id(&self, limit: i64) -> Result<Vec<Vehicle>, sqlx::Error> {
        let vehicles: Vec<Vehicle> = sqlx::query_as(
            r#"
            SELECT id, vehicle_identification_number, model, vehicle_type, fuel
            FROM vehicles
            ORDER BY id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
