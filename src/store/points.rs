//! Running point total persistence
//!
//! The cumulative total is a single integer stored as a small bincode
//! blob. A missing file reads as zero; writes land on a temp file and
//! rename into place so a crash cannot leave a truncated blob behind.

use crate::store::error::StoreResult;
use std::path::Path;

/// Load the running total, treating a missing file as zero.
pub fn load_points(path: &Path) -> StoreResult<u64> {
    if !path.exists() {
        return Ok(0);
    }

    let bytes = std::fs::read(path)?;
    let total: u64 = bincode::deserialize(&bytes)?;
    Ok(total)
}

/// Persist the running total atomically.
pub fn save_points(path: &Path, total: u64) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bytes = bincode::serialize(&total)?;
    let tmp = path.with_extension("bin.tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
