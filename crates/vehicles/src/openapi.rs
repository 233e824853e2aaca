use axum::response::Json;
use utoipa::OpenApi;

use crate::{handlers, models::Vehicle};

#[derive(OpenApi)]
#[openapi(
    info(title = "Vehicles API", description = "Read-only listing of seeded vehicles"),
    paths(handlers::list_vehicles, handlers::health_check),
    components(schemas(Vehicle)),
    tags(
        (name = "vehicles", description = "Vehicle listing"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
