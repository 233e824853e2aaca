//! Custom `fake` fakers for vehicle attributes.
//!
//! Each faker is a unit struct usable with `#[dummy(faker = "...")]` or
//! directly via [`fake::Fake::fake_with_rng`].

use fake::Dummy;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::vin::random_vin;

pub const MODELS: &[&str] = &[
    "Fiesta",
    "Focus",
    "Taurus",
    "Mustang",
    "Explorer",
    "Expedition",
    "F-150",
    "Model T",
    "Ranger",
    "Volt",
    "Cruze",
    "Malibu",
    "Impala",
    "Camaro",
    "Corvette",
    "Colorado",
    "Silverado",
    "El Camino",
    "CTS",
    "XTS",
    "ATS",
    "Escalade",
    "Alpine",
    "Charger",
    "LeBaron",
    "PT Cruiser",
    "Challenger",
    "Durango",
    "Grand Caravan",
    "Wrangler",
    "Grand Cherokee",
    "Roadster",
    "Model S",
    "Model 3",
    "Camry",
    "Prius",
    "Land Cruiser",
    "Accord",
    "Civic",
    "Element",
    "Sentra",
    "Altima",
    "A8",
    "A4",
    "Beetle",
    "Jetta",
    "Golf",
    "911",
    "Spyder",
    "Countach",
    "Mercielago",
    "Aventador",
    "Cayenne",
    "Fortwo",
    "XC90",
    "V90",
];

pub const TYPES: &[&str] = &[
    "Cargo Van",
    "Convertible",
    "Coupe",
    "Crew Cab Pickup",
    "Extended Cab Pickup",
    "Hatchback",
    "Minivan",
    "Passenger Van",
    "SUV",
    "Sedan",
    "Wagon",
];

pub const FUELS: &[&str] = &["Diesel", "Electric", "Gasoline", "Hybrid"];

/// A 17 character VIN with a valid check digit.
pub struct Vin;

/// A vehicle model name, e.g. "Civic".
pub struct VehicleModel;

/// A body type, e.g. "Hatchback".
pub struct VehicleType;

/// A fuel kind, e.g. "Diesel".
pub struct Fuel;

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

impl Dummy<Vin> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Vin, rng: &mut R) -> Self {
        random_vin(rng)
    }
}

impl Dummy<VehicleModel> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &VehicleModel, rng: &mut R) -> Self {
        pick(MODELS, rng)
    }
}

impl Dummy<VehicleType> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &VehicleType, rng: &mut R) -> Self {
        pick(TYPES, rng)
    }
}

impl Dummy<Fuel> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Fuel, rng: &mut R) -> Self {
        pick(FUELS, rng)
    }
}
