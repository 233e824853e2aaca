//! HTTP request handlers for the vehicles API.

pub mod health;
pub mod vehicles;

pub use health::{__path_health_check, health_check};
pub use vehicles::{__path_list_vehicles, LIST_LIMIT, list_vehicles};
