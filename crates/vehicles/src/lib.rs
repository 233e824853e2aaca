pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod provider;
pub mod request_id;
pub mod seeder;
pub mod store;

#[cfg(test)]
mod test_utils;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use tracing::info;
use vehicle_data::VehicleGenerator;

use crate::{
    config::Config,
    errors::StartupError,
    handlers::{health_check, list_vehicles},
    openapi::openapi_json,
    request_id::request_id_middleware,
    seeder::SeedOutcome,
    store::{SharedStore, VehicleStore},
};

/// Connects to the configured backend, applies its migrations and seeds an
/// empty table. The returned store is ready to serve requests.
pub async fn initialize_store(
    config: &Config,
    generator: &dyn VehicleGenerator,
) -> Result<SharedStore, StartupError> {
    let provider = config.database.provider;
    info!(%provider, "Connecting to database");
    let store = store::connect(&config.database).await?;

    store.migrate().await?;
    info!(%provider, migrations = provider.migrations_dir(), "Migrations applied");

    match seeder::initialize(store.as_ref(), generator).await? {
        SeedOutcome::Seeded(count) => info!(count, "Database seeded"),
        SeedOutcome::AlreadySeeded => info!("Database already contains vehicles"),
    }

    Ok(store)
}

pub fn create_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(list_vehicles))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(store))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(middleware::from_fn(request_id_middleware))
}

pub async fn run_server(store: SharedStore, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
