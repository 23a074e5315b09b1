//! Tree-planting bonus extractor
//!
//! Free-text action descriptions can mention how many trees were
//! planted. The largest integer in the text drives a bonus of
//! `50 + 5 * (n - 1)` points; text with no integer earns no bonus.

use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("valid regex literal"))
}

/// Extract the tree-planting bonus from an action description.
///
/// Scans for decimal integers, takes the maximum `n`, and awards
/// `50 + 5 * (n - 1)`. Returns 0 when the text contains no integer.
/// The formula's own arithmetic governs edge values (`n = 0` yields 45);
/// absurdly large counts saturate instead of overflowing.
pub fn tree_bonus(description: &str) -> u64 {
    let max = number_pattern()
        .find_iter(description)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .max();

    match max {
        Some(n) => {
            let n = i64::try_from(n).unwrap_or(i64::MAX);
            let bonus = 50i64.saturating_add(n.saturating_sub(1).saturating_mul(5));
            bonus.max(0) as u64
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_count() {
        assert_eq!(tree_bonus("planted 3 trees"), 60);
        assert_eq!(tree_bonus("planted 1 tree"), 50);
    }

    #[test]
    fn test_no_numbers() {
        assert_eq!(tree_bonus("no numbers here"), 0);
        assert_eq!(tree_bonus(""), 0);
    }

    #[test]
    fn test_max_number_wins() {
        // Two counts mentioned, the larger one drives the bonus
        assert_eq!(tree_bonus("5 and 12 trees"), 105);
        assert_eq!(tree_bonus("12 and 5 trees"), 105);
    }

    #[test]
    fn test_zero_count() {
        // The formula's arithmetic applies as-is
        assert_eq!(tree_bonus("planted 0 trees"), 45);
    }

    #[test]
    fn test_huge_count_saturates() {
        let text = format!("planted {} trees", u64::MAX);
        assert_eq!(tree_bonus(&text), i64::MAX as u64);
    }

    #[test]
    fn test_digits_embedded_in_words() {
        // Any digit run counts, matching the regex scan
        assert_eq!(tree_bonus("tree2tree"), 55);
    }
}
