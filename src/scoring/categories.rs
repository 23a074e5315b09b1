//! Fixed category point table
//!
//! Every eco-action belongs to exactly one category, and each category
//! carries a fixed base point value. The table is compiled in and never
//! mutated at runtime.

/// Category name to base points, fixed at build time.
///
/// Tree-planting bonuses are handled separately by [`super::tree`];
/// this table only covers the base award.
pub const CATEGORY_POINTS: &[(&str, u64)] = &[
    ("Daily Habits/Small Scale", 50),
    ("Large Scale", 150),
    ("Medium Scale", 75),
    ("Transportation", 70),
    ("Food & Lifestyle", 60),
    ("Waste Reduction", 70),
    ("Eco-Friendly Shopping", 60),
    ("Home Sustainability", 80),
    ("Digital Consciousness", 50),
    ("Community Involvement", 80),
    ("Sustainable Energy Usage", 90),
    ("Water Conservation", 70),
    ("Eco-Friendly Commuting", 75),
    ("Green Spaces & Biodiversity", 85),
    ("Minimalist Living", 65),
    ("Responsible Tourism", 80),
    ("Sustainable Technology", 75),
    ("Environmental Activism & Awareness", 90),
    ("Zero-Waste Living", 85),
    ("Upcycling & DIY Sustainability", 75),
    ("Eco-Conscious Pet Care", 60),
    ("Ethical Consumption", 70),
    ("Climate Change Action", 95),
    ("Sustainable Food Choices", 75),
    ("Circular Economy Participation", 80),
    ("Community-Based Sustainability", 85),
    ("Sustainable Event Planning", 70),
    ("Eco-Friendly Home Design", 90),
    ("Others", 50),
];

/// Look up the base points for a category by exact name.
///
/// Returns `None` for unknown categories; callers at the API boundary
/// turn that into a validation error.
pub fn base_points(name: &str) -> Option<u64> {
    CATEGORY_POINTS
        .iter()
        .find(|(cat, _)| *cat == name)
        .map(|(_, points)| *points)
}

/// All categories in table order, for listings and chart data.
pub fn all() -> &'static [(&'static str, u64)] {
    CATEGORY_POINTS
}

/// Check whether a category name exists in the table.
pub fn is_known(name: &str) -> bool {
    base_points(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(base_points("Daily Habits/Small Scale"), Some(50));
        assert_eq!(base_points("Large Scale"), Some(150));
        assert_eq!(base_points("Climate Change Action"), Some(95));
        assert_eq!(base_points("Others"), Some(50));
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(base_points("Not A Category"), None);
        assert!(!is_known("large scale")); // lookup is case-sensitive
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(all().len(), 29);
        // No duplicate names
        for (i, (name, _)) in all().iter().enumerate() {
            assert!(
                !all().iter().skip(i + 1).any(|(other, _)| other == name),
                "duplicate category: {}",
                name
            );
        }
    }
}
