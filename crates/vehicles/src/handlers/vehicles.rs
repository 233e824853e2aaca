//! Vehicle listing.

use axum::{Extension, response::Json};

use crate::{errors::AppError, models::Vehicle, store::SharedStore};

/// Maximum number of vehicles returned by [`list_vehicles`].
pub const LIST_LIMIT: i64 = 10;

/// List the first ten vehicles ordered by id.
#[utoipa::path(
    get,
    path = "/",
    tag = "vehicles",
    responses(
        (status = 200, description = "Up to ten vehicles, ascending id", body = Vec<Vehicle>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_vehicles(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let vehicles = store.first_by_id(LIST_LIMIT).await?;
    Ok(Json(vehicles))
}
