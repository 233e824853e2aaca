//! Synthetic vehicle data for the vehicles service.
//!
//! The service seeds an empty table through the [`VehicleGenerator`] trait so
//! that the source of records can be swapped: [`FakeVehicleGenerator`] yields
//! plausible random vehicles, [`FixtureGenerator`] yields predictable ones.
//!
//! # Quick Start
//!
//! ```rust
//! use vehicle_data::prelude::*;
//!
//! let generator = FakeVehicleGenerator::with_seed(12345);
//! let vehicles = generator.generate(100);
//!
//! assert_eq!(vehicles.len(), 100);
//! assert!(vehicles.iter().all(|v| v.vehicle_identification_number.len() == 17));
//! ```

pub mod fakers;
pub mod generators;
pub mod vin;

pub use generators::{FakeVehicleGenerator, FixtureGenerator, NewVehicle, VehicleGenerator};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::fakers::{Fuel, VehicleModel, VehicleType, Vin};
    pub use crate::generators::{
        FakeVehicleGenerator, FixtureGenerator, NewVehicle, VehicleGenerator,
    };
}
