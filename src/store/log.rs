//! Action log persistence
//!
//! Every accepted submission appends one row to a CSV log. The log is
//! append-only; reads return rows in file order (oldest first).

use crate::store::error::StoreResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One logged eco-action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// User name, empty when the submission was anonymous
    pub user: String,
    /// Category name from the fixed table
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Total points awarded (base + bonuses)
    pub points: u64,
}

impl ActionRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        user: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        points: u64,
    ) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            user: user.into(),
            category: category.into(),
            description: description.into(),
            points,
        }
    }
}

/// Load all log rows, treating a missing file as an empty log.
pub fn load_log(path: &Path) -> StoreResult<Vec<ActionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Append one row, writing the header when the file is new.
pub fn append_log(path: &Path, record: &ActionRecord) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let write_header = !path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_log() {
        let dir = tempdir().unwrap();
        let records = load_log(&dir.path().join("eco_logs.csv")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_append_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eco_logs.csv");

        let first = ActionRecord::new("alice", "Transportation", "took the bus", 70);
        let second = ActionRecord::new("", "Others", "planted 3 trees", 110);

        append_log(&path, &first).unwrap();
        append_log(&path, &second).unwrap();

        let records = load_log(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records[1].user, "");
        assert_eq!(records[1].points, 110);
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eco_logs.csv");

        append_log(&path, &ActionRecord::new("a", "Others", "x", 50)).unwrap();
        append_log(&path, &ActionRecord::new("b", "Others", "y", 50)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header_count = content
            .lines()
            .filter(|line| line.starts_with("timestamp,"))
            .count();
        assert_eq!(header_count, 1);
    }

    #[test]
    fn test_description_with_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eco_logs.csv");

        let record = ActionRecord::new("alice", "Waste Reduction", "composted, recycled, reused", 70);
        append_log(&path, &record).unwrap();

        let records = load_log(&path).unwrap();
        assert_eq!(records[0].description, "composted, recycled, reused");
    }
}
