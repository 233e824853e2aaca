use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vehicle_data::FakeVehicleGenerator;
use vehicles::{config::Config, errors::StartupError, initialize_store, run_server};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().map_err(StartupError::from)?;

    let generator = match config.seed {
        Some(seed) => FakeVehicleGenerator::with_seed(seed),
        None => FakeVehicleGenerator::new(),
    };

    let store = initialize_store(&config, &generator).await?;

    run_server(store, config.port).await
}
