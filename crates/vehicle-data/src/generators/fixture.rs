//! Deterministic vehicles for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{NewVehicle, VehicleGenerator};

/// Produces numbered vehicles: the n-th record generated (1-based, counted
/// across calls) has VIN `VIN` followed by `n` zero-padded to 14 digits.
///
/// Also counts how many times [`VehicleGenerator::generate`] was invoked.
#[derive(Debug, Default)]
pub struct FixtureGenerator {
    produced: AtomicUsize,
    calls: AtomicUsize,
}

impl FixtureGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the n-th fixture vehicle.
    pub fn vehicle(n: usize) -> NewVehicle {
        NewVehicle {
            vehicle_identification_number: format!("VIN{n:014}"),
            model: format!("Model {n}"),
            vehicle_type: "Sedan".to_string(),
            fuel: "Gasoline".to_string(),
        }
    }

    /// Number of times `generate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VehicleGenerator for FixtureGenerator {
    fn generate(&self, count: usize) -> Vec<NewVehicle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let start = self.produced.fetch_add(count, Ordering::SeqCst);
        (start + 1..=start + count).map(Self::vehicle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_continues_across_calls() {
        let fixtures = FixtureGenerator::new();

        let first = fixtures.generate(2);
        let second = fixtures.generate(1);

        assert_eq!(first[0].vehicle_identification_number, "VIN00000000000001");
        assert_eq!(first[1].model, "Model 2");
        assert_eq!(second[0].model, "Model 3");
        assert_eq!(fixtures.calls(), 2);
    }
}
