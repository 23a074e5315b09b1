//! Scoring core
//!
//! Pure functions and lookup tables that turn a submitted eco-action
//! into points:
//!
//! - [`categories`]: fixed category → base points table
//! - [`tree`]: tree-planting bonus from free-text descriptions
//! - [`growth`]: cumulative total → tree growth stage
//! - [`carbon`]: linear carbon-impact estimate
//!
//! Nothing in this module touches the filesystem or network.

pub mod carbon;
pub mod categories;
pub mod growth;
pub mod tree;

pub use carbon::estimate_carbon_impact;
pub use categories::{base_points, CATEGORY_POINTS};
pub use growth::GrowthStage;
pub use tree::tree_bonus;

use serde::Serialize;

/// Points awarded when a valid photo accompanies a submission.
pub const PHOTO_BONUS: u64 = 10;

/// Breakdown of points awarded for a single submission.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Base points from the category table
    pub base: u64,
    /// Tree-planting bonus from the description text
    pub tree_bonus: u64,
    /// Flat photo-upload bonus
    pub photo_bonus: u64,
}

impl ScoreBreakdown {
    /// Total points awarded for the submission.
    pub fn total(&self) -> u64 {
        self.base + self.tree_bonus + self.photo_bonus
    }
}

/// Score a submission: category base points plus description-derived
/// tree bonus plus the photo bonus when a photo was attached.
pub fn score_action(category_base: u64, description: &str, has_photo: bool) -> ScoreBreakdown {
    ScoreBreakdown {
        base: category_base,
        tree_bonus: tree_bonus(description),
        photo_bonus: if has_photo { PHOTO_BONUS } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_action_all_components() {
        let score = score_action(50, "planted 3 trees", true);
        assert_eq!(score.base, 50);
        assert_eq!(score.tree_bonus, 60);
        assert_eq!(score.photo_bonus, 10);
        assert_eq!(score.total(), 120);
    }

    #[test]
    fn test_score_action_base_only() {
        let score = score_action(70, "took the bus to work", false);
        assert_eq!(score.tree_bonus, 0);
        assert_eq!(score.photo_bonus, 0);
        assert_eq!(score.total(), 70);
    }
}
