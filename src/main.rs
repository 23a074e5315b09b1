//! EcoTrack status entry point
//!
//! Opens the store and prints a summary of the tracked state.

use ecotrack::scoring::{estimate_carbon_impact, GrowthStage};
use ecotrack::store::{EcoStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ecotrack=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("EcoTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = ecotrack::Config::load_default();
    tracing::info!("Data directory: {}", config.storage.data_dir);

    let store = EcoStore::open(StoreConfig::new(&config.storage.data_dir))?;

    let stats = store.stats().await?;
    let stage = GrowthStage::from_points(stats.total_points);

    tracing::info!("Store stats: {}", stats);
    tracing::info!("Growth stage: {}", stage);
    tracing::info!(
        "Carbon impact: -{} kg CO₂",
        estimate_carbon_impact(stats.total_points)
    );

    for row in store.leaderboard().await.iter().take(10) {
        tracing::info!("  {} - {} points", row.user, row.points);
    }

    Ok(())
}
