//! # EcoTrack
//!
//! Eco-action tracking service - log eco-actions, accrue points from a
//! fixed category table, watch your tree grow, and climb the
//! cross-user leaderboard.
//!
//! ## Features
//!
//! - **Fixed scoring table**: 29 categories with compiled-in point values
//! - **Tree-planting bonus**: free-text descriptions mentioning tree
//!   counts earn extra points
//! - **Growth stages**: the cumulative total renders as a tree growing
//!   from seedling to champion
//! - **Leaderboard**: per-user cumulative points in a small CSV table
//! - **Carbon impact**: a simple kg-CO₂ estimate per point
//!
//! ## Modules
//!
//! - [`scoring`]: pure scoring core (categories, bonuses, growth stages)
//! - [`store`]: file-backed persistence (total, leaderboard, action log)
//! - [`photo`]: photo upload validation
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecotrack::scoring::{self, GrowthStage};
//! use ecotrack::store::{ActionRecord, EcoStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EcoStore::open(StoreConfig::new("ecotrack_data"))?;
//!
//!     // Score a submission
//!     let base = scoring::base_points("Others").unwrap();
//!     let score = scoring::score_action(base, "planted 3 trees", false);
//!
//!     // Persist it
//!     let record = ActionRecord::new("alice", "Others", "planted 3 trees", score.total());
//!     let total = store.submit(record).await?;
//!
//!     println!("Total: {} ({})", total, GrowthStage::from_points(total));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod photo;
pub mod scoring;
pub mod store;

// Re-export top-level types for convenience
pub use scoring::{
    base_points, estimate_carbon_impact, score_action, tree_bonus, GrowthStage, ScoreBreakdown,
    CATEGORY_POINTS, PHOTO_BONUS,
};

pub use store::{
    ActionRecord, EcoStore, Leaderboard, LeaderboardRow, StoreConfig, StoreError, StoreResult,
    StoreStats,
};

pub use photo::{Photo, PhotoError, ALLOWED_EXTENSIONS};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
