use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{config::ConfigError, provider::Provider, seeder::SeedError};

/// Errors raised while serving a request.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Errors that abort startup before the server accepts connections.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not connect to {provider} after {attempts} attempt(s): {source}")]
    Connect {
        provider: Provider,
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Seeding failed: {0}")]
    Seed(#[from] SeedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_error_is_opaque_500() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Internal server error" }));
    }

    #[test]
    fn test_config_error_becomes_startup_error() {
        let err = StartupError::from(ConfigError::MissingConnectionString {
            provider: Provider::Postgres,
            key: "POSTGRES_DATABASE_URL",
        });

        assert!(matches!(
            err,
            StartupError::Config(ConfigError::MissingConnectionString { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing connection string for provider 'postgres': \
             set POSTGRES_DATABASE_URL"
        );
    }
}
