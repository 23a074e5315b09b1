//! EcoTrack persistence layer
//!
//! Three small artifacts live under the data directory:
//! - `total_points.bin`: the running point total (bincode blob)
//! - `leaderboard.csv`: per-user cumulative points (`User,Points`)
//! - `eco_logs.csv`: append-only log of accepted submissions
//!
//! [`EcoStore`] loads everything at startup, holds state behind async
//! RwLocks for the API handlers, and writes through on every
//! submission. Missing files mean empty state, never an error.
//! Locking is in-process only; concurrent processes sharing a data
//! directory are out of scope.

pub mod error;
pub mod leaderboard;
pub mod log;
pub mod points;

pub use error::{StoreError, StoreResult};
pub use leaderboard::{Leaderboard, LeaderboardRow};
pub use log::ActionRecord;

use std::path::PathBuf;
use tokio::sync::RwLock;

/// Configuration for the store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory for all persisted files
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("ecotrack_data"),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path to the running-total blob
    pub fn points_path(&self) -> PathBuf {
        self.data_dir.join("total_points.bin")
    }

    /// Path to the leaderboard CSV
    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join("leaderboard.csv")
    }

    /// Path to the action log CSV
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("eco_logs.csv")
    }
}

/// Summary counters for status output and health checks.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct StoreStats {
    pub total_points: u64,
    pub users: usize,
    pub actions_logged: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points, {} users, {} actions logged",
            self.total_points, self.users, self.actions_logged
        )
    }
}

/// The EcoTrack store
pub struct EcoStore {
    config: StoreConfig,
    /// Running point total, write-through to disk
    total: RwLock<u64>,
    /// Leaderboard table, write-through to disk
    leaderboard: RwLock<Leaderboard>,
    /// Serializes log appends
    log_guard: RwLock<()>,
}

impl EcoStore {
    /// Open the store, loading persisted state.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let total = points::load_points(&config.points_path())?;
        let board = Leaderboard::load(&config.leaderboard_path())?;

        tracing::info!(
            total_points = total,
            users = board.len(),
            "Store opened from {:?}",
            config.data_dir
        );

        Ok(Self {
            config,
            total: RwLock::new(total),
            leaderboard: RwLock::new(board),
            log_guard: RwLock::new(()),
        })
    }

    /// Record an accepted submission.
    ///
    /// Bumps the running total, appends to the action log, and updates
    /// the leaderboard when the record carries a user name. Returns the
    /// new running total.
    pub async fn submit(&self, record: ActionRecord) -> StoreResult<u64> {
        let new_total = {
            let mut total = self.total.write().await;
            *total = total.saturating_add(record.points);
            points::save_points(&self.config.points_path(), *total)?;
            *total
        };

        {
            let _guard = self.log_guard.write().await;
            log::append_log(&self.config.log_path(), &record)?;
        }

        if !record.user.is_empty() {
            let mut board = self.leaderboard.write().await;
            board.record(&record.user, record.points);
            board.save(&self.config.leaderboard_path())?;
        }

        tracing::debug!(
            user = %record.user,
            category = %record.category,
            points = record.points,
            new_total,
            "Submission recorded"
        );

        Ok(new_total)
    }

    /// Current running total.
    pub async fn total_points(&self) -> u64 {
        *self.total.read().await
    }

    /// Leaderboard rows sorted by points descending.
    pub async fn leaderboard(&self) -> Vec<LeaderboardRow> {
        self.leaderboard.read().await.sorted_rows()
    }

    /// Logged actions, newest first, capped at `limit`.
    pub async fn recent_actions(&self, limit: usize) -> StoreResult<Vec<ActionRecord>> {
        let _guard = self.log_guard.read().await;
        let mut records = log::load_log(&self.config.log_path())?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    /// Summary counters.
    pub async fn stats(&self) -> StoreResult<StoreStats> {
        let total_points = self.total_points().await;
        let users = self.leaderboard.read().await.len();
        let actions_logged = {
            let _guard = self.log_guard.read().await;
            log::load_log(&self.config.log_path())?.len()
        };

        Ok(StoreStats {
            total_points,
            users,
            actions_logged,
        })
    }
}
