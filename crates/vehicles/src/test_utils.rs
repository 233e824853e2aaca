//! Shared helpers for unit tests.

use sqlx::sqlite::SqlitePoolOptions;
use vehicle_data::FixtureGenerator;

use crate::store::{SqliteStore, VehicleStore};

/// In-memory store with migrations applied. A single connection keeps
/// every query on the same database.
pub(crate) async fn memory_store() -> SqliteStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let store = SqliteStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");
    store
}

/// Inserts a fixture vehicle with an explicit id, bypassing autoincrement.
pub(crate) async fn insert_with_id(store: &SqliteStore, id: i32) {
    let vehicle = FixtureGenerator::vehicle(id as usize);
    sqlx::query(
        r#"
        INSERT INTO vehicles (id, vehicle_identification_number, model, vehicle_type, fuel)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&vehicle.vehicle_identification_number)
    .bind(&vehicle.model)
    .bind(&vehicle.vehicle_type)
    .bind(&vehicle.fuel)
    .execute(store.pool())
    .await
    .expect("Failed to insert vehicle");
}
