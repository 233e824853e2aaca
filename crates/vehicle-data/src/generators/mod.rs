//! Vehicle generators.
//!
//! - [`FakeVehicleGenerator`]: plausible random vehicles built with `fake`
//! - [`FixtureGenerator`]: predictable vehicles for tests

pub mod fixture;
pub mod vehicle;

pub use fixture::FixtureGenerator;
pub use vehicle::{FakeVehicleGenerator, NewVehicle};

/// Source of vehicle records used to seed an empty table.
///
/// Implementations return exactly `count` records. Identifiers are assigned
/// by the storage backend on insert, so generated records carry none.
pub trait VehicleGenerator: Send + Sync {
    fn generate(&self, count: usize) -> Vec<NewVehicle>;
}
