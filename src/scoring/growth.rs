//! Tree growth stages
//!
//! The cumulative point total maps onto a five-bucket threshold ladder,
//! rendered as the user's tree growing from seedling to champion.

use serde::{Deserialize, Serialize};

/// Growth stage derived from the cumulative point total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Seedling,
    Sapling,
    YoungTree,
    MatureTree,
    EcoChampionTree,
}

impl GrowthStage {
    /// Map a point total onto a stage.
    ///
    /// Thresholds: 100, 250, 500, 1000. A total sitting exactly on a
    /// threshold belongs to the higher stage.
    pub fn from_points(total: u64) -> Self {
        if total < 100 {
            GrowthStage::Seedling
        } else if total < 250 {
            GrowthStage::Sapling
        } else if total < 500 {
            GrowthStage::YoungTree
        } else if total < 1000 {
            GrowthStage::MatureTree
        } else {
            GrowthStage::EcoChampionTree
        }
    }

    /// All stages in ascending order.
    pub fn all() -> &'static [GrowthStage] {
        &[
            GrowthStage::Seedling,
            GrowthStage::Sapling,
            GrowthStage::YoungTree,
            GrowthStage::MatureTree,
            GrowthStage::EcoChampionTree,
        ]
    }

    /// Display label with the dashboard's emoji prefix.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "🌱 Seedling",
            GrowthStage::Sapling => "🌿 Sapling",
            GrowthStage::YoungTree => "🌳 Young Tree",
            GrowthStage::MatureTree => "🌲 Mature Tree",
            GrowthStage::EcoChampionTree => "🌴 Eco Champion Tree",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(GrowthStage::from_points(0), GrowthStage::Seedling);
        assert_eq!(GrowthStage::from_points(99), GrowthStage::Seedling);
        assert_eq!(GrowthStage::from_points(100), GrowthStage::Sapling);
        assert_eq!(GrowthStage::from_points(249), GrowthStage::Sapling);
        assert_eq!(GrowthStage::from_points(250), GrowthStage::YoungTree);
        assert_eq!(GrowthStage::from_points(499), GrowthStage::YoungTree);
        assert_eq!(GrowthStage::from_points(500), GrowthStage::MatureTree);
        assert_eq!(GrowthStage::from_points(999), GrowthStage::MatureTree);
        assert_eq!(GrowthStage::from_points(1000), GrowthStage::EcoChampionTree);
        assert_eq!(
            GrowthStage::from_points(u64::MAX),
            GrowthStage::EcoChampionTree
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(GrowthStage::Seedling.to_string(), "🌱 Seedling");
        assert_eq!(
            GrowthStage::EcoChampionTree.to_string(),
            "🌴 Eco Champion Tree"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&GrowthStage::YoungTree).unwrap();
        assert_eq!(json, "\"young_tree\"");
        let stage: GrowthStage = serde_json::from_str(&json).unwrap();
        assert_eq!(stage, GrowthStage::YoungTree);
    }
}
