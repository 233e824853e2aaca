use async_trait::async_trait;
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};

use super::{VehicleStore, connect_with_retry};
use crate::{
    config::DatabaseConfig,
    errors::StartupError,
    models::{NewVehicle, Vehicle},
    provider::Provider,
};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        let pool = connect_with_retry(config, || {
            PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(&config.url)
        })
        .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VehicleStore for PostgresStore {
    fn provider(&self) -> Provider {
        Provider::Postgres
    }

    async fn migrate(&self) -> Result<(), MigrateError> {
        Provider::Postgres.migrator().run(&self.pool).await
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
                VALUES ($1, $2, $3, $4)
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
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
