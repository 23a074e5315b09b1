//! Carbon impact estimation
//!
//! Flat linear model: every point stands for roughly 0.05 kg of CO₂
//! avoided. Cosmetic figure for the dashboard, not a real footprint.

/// Estimated kg of CO₂ avoided for a point total, rounded to two decimals.
pub fn estimate_carbon_impact(points: u64) -> f64 {
    (points as f64 * 0.05 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_estimates() {
        assert_eq!(estimate_carbon_impact(0), 0.0);
        assert_eq!(estimate_carbon_impact(100), 5.0);
        assert_eq!(estimate_carbon_impact(60), 3.0);
        assert_eq!(estimate_carbon_impact(1), 0.05);
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 7 * 0.05 = 0.35 exactly; 13 * 0.05 = 0.65
        assert_eq!(estimate_carbon_impact(7), 0.35);
        assert_eq!(estimate_carbon_impact(13), 0.65);
        // Result always lands on two decimals
        let v = estimate_carbon_impact(333);
        assert_eq!((v * 100.0).round() / 100.0, v);
    }
}
