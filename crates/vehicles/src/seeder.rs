//! Startup seeding of the vehicles table.

use thiserror::Error;
use tracing::info;
use vehicle_data::VehicleGenerator;

use crate::store::VehicleStore;

/// Number of vehicles written when seeding an empty table.
pub const SEED_COUNT: usize = 100;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already held rows; nothing was written.
    AlreadySeeded,
    /// The table was empty and this many rows were written.
    Seeded(u64),
}

/// Seeds the table with [`SEED_COUNT`] generated vehicles if it is empty.
///
/// The emptiness check and the insert are not atomic: two processes starting
/// against the same empty database may both seed.
pub async fn initialize(
    store: &dyn VehicleStore,
    generator: &dyn VehicleGenerator,
) -> Result<SeedOutcome, SeedError> {
    if store.count().await? > 0 {
        info!("Vehicles table already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    info!("Seeding {} vehicles...", SEED_COUNT);

    let vehicles = generator.generate(SEED_COUNT);
    let inserted = store.insert_batch(&vehicles).await?;

    info!("Seeded {} vehicles", inserted);
    Ok(SeedOutcome::Seeded(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_with_id, memory_store};
    use vehicle_data::{FakeVehicleGenerator, FixtureGenerator};

    #[tokio::test]
    async fn test_seeds_empty_table_with_100_rows() {
        let store = memory_store().await;
        let fixtures = FixtureGenerator::new();

        let outcome = initialize(&store, &fixtures).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded(100));
        assert_eq!(store.count().await.unwrap(), 100);
        assert_eq!(fixtures.calls(), 1);
    }

    #[tokio::test]
    async fn test_seeding_twice_adds_nothing() {
        let store = memory_store().await;
        let fixtures = FixtureGenerator::new();

        initialize(&store, &fixtures).await.unwrap();
        let outcome = initialize(&store, &fixtures).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
        assert_eq!(store.count().await.unwrap(), 100);
        assert_eq!(fixtures.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_empty_table_is_left_alone() {
        let store = memory_store().await;
        insert_with_id(&store, 42).await;
        let fixtures = FixtureGenerator::new();

        let outcome = initialize(&store, &fixtures).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(fixtures.calls(), 0);
    }

    #[tokio::test]
    async fn test_seeds_with_fake_generator() {
        let store = memory_store().await;

        initialize(&store, &FakeVehicleGenerator::with_seed(12345))
            .await
            .unwrap();

        let vehicles = store.first_by_id(100).await.unwrap();
        assert_eq!(vehicles.len(), 100);
        assert!(vehicles.iter().all(|v| !v.model.is_empty() && !v.fuel.is_empty()));
    }

    #[tokio::test]
    async fn test_database_failure_propagates() {
        let store = memory_store().await;
        store.pool().close().await;

        let result = initialize(&store, &FixtureGenerator::new()).await;
        assert!(matches!(result, Err(SeedError::Database(_))));
    }
}
