//! Random vehicle generation.

use fake::{Dummy, Fake, Faker};
use rand::{SeedableRng, rngs::StdRng};

use super::VehicleGenerator;
use crate::fakers::{Fuel, VehicleModel, VehicleType, Vin};

/// Generated vehicle data ready for database insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Dummy)]
pub struct NewVehicle {
    #[dummy(faker = "Vin")]
    pub vehicle_identification_number: String,
    #[dummy(faker = "VehicleModel")]
    pub model: String,
    #[dummy(faker = "VehicleType")]
    pub vehicle_type: String,
    #[dummy(faker = "Fuel")]
    pub fuel: String,
}

/// Generates plausible random vehicles.
///
/// Without a seed every call yields fresh data. With a seed every call
/// yields the same sequence, which keeps demo databases reproducible.
#[derive(Debug, Clone, Default)]
pub struct FakeVehicleGenerator {
    seed: Option<u64>,
}

impl FakeVehicleGenerator {
    /// Creates a generator backed by OS entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a generator that always produces the same records.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl VehicleGenerator for FakeVehicleGenerator {
    fn generate(&self, count: usize) -> Vec<NewVehicle> {
        let mut rng = self.rng();
        (0..count).map(|_| Faker.fake_with_rng(&mut rng)).collect()
    }
}
