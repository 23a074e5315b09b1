//! EcoTrack API Server
//!
//! Run with: cargo run --bin ecotrack-api
//!
//! # Configuration
//!
//! Loaded from the default config locations with environment overrides:
//! - `ECOTRACK_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `ECOTRACK_API_PORT`: Port to listen on (default: 8090)
//! - `ECOTRACK_DATA_DIR`: Data directory (default: platform data dir)
//! - `RUST_LOG`: Log level (default: info)

use ecotrack::api::{serve, ApiConfig, AppState};
use ecotrack::store::{EcoStore, StoreConfig};
use ecotrack::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrack=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EcoTrack API server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_default();
    let api_config = ApiConfig::new(&config.api.host, config.api.port);

    tracing::info!("Data directory: {}", config.storage.data_dir);

    let store = Arc::new(EcoStore::open(StoreConfig::new(&config.storage.data_dir))?);
    let stats = store.stats().await?;
    tracing::info!("Store ready: {}", stats);

    let state = AppState::new(store, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("EcoTrack API server stopped");
    Ok(())
}
