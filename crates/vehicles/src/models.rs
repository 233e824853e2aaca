use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub use vehicle_data::NewVehicle;

/// A persisted vehicle. `id` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub vehicle_identification_number: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub fuel: String,
}
