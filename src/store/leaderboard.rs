//! Leaderboard persistence
//!
//! Cross-user point totals in a small CSV with a `User,Points` header.
//! One row per user name; recording points for a known name increments
//! the row in place, an unknown name appends. The whole file is
//! rewritten on every update, which is fine at this table's size.

use crate::store::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One leaderboard row: a user and their cumulative points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardRow {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Points")]
    pub points: u64,
}

/// In-memory leaderboard with CSV load/save.
#[derive(Debug, Default)]
pub struct Leaderboard {
    rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from CSV, treating a missing file as an empty board.
    ///
    /// A non-numeric points cell is reported as corruption rather than
    /// silently dropped.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            let user = record
                .get(0)
                .ok_or_else(|| StoreError::Corruption {
                    path: path.to_path_buf(),
                    detail: "row missing user column".to_string(),
                })?
                .to_string();
            let points = record
                .get(1)
                .and_then(|cell| cell.trim().parse::<u64>().ok())
                .ok_or_else(|| StoreError::Corruption {
                    path: path.to_path_buf(),
                    detail: format!("non-numeric points for user '{}'", user),
                })?;

            rows.push(LeaderboardRow { user, points });
        }

        Ok(Self { rows })
    }

    /// Save to CSV with the `User,Points` header.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("csv.tmp");
        let mut writer = csv::Writer::from_path(&tmp)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        drop(writer);
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Add points for a user: increment the existing row or append a new one.
    pub fn record(&mut self, user: &str, points: u64) {
        match self.rows.iter_mut().find(|row| row.user == user) {
            Some(row) => row.points = row.points.saturating_add(points),
            None => self.rows.push(LeaderboardRow {
                user: user.to_string(),
                points,
            }),
        }
    }

    /// Rows sorted by points descending (ties keep insertion order).
    pub fn sorted_rows(&self) -> Vec<LeaderboardRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        rows
    }

    /// Points for a single user, if present.
    pub fn points_for(&self, user: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.user == user)
            .map(|row| row.points)
    }

    /// Number of users on the board.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
