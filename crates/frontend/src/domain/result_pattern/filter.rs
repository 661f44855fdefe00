use contracts::domain::result_pattern::ResultPattern;
use contracts::enums::PatternType;

use crate::shared::list_utils::Searchable;

impl Searchable for ResultPattern {
    fn matches_filter(&self, filter: &str) -> bool {
        self.pattern_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Derive the visible subsequence of `patterns` for the current filters.
///
/// A record is kept when its name case-insensitively contains `name_filter`
/// (the empty string matches everything) and, if a type is selected, its
/// type matches exactly. Order is preserved.
pub fn filter_patterns(
    patterns: &[ResultPattern],
    name_filter: &str,
    type_filter: Option<PatternType>,
) -> Vec<ResultPattern> {
    patterns
        .iter()
        .filter(|p| p.matches_filter(name_filter))
        .filter(|p| type_filter.map_or(true, |ty| p.pattern_type == ty))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result_pattern::store::mock_patterns;

    fn names(patterns: &[ResultPattern]) -> Vec<&str> {
        patterns.iter().map(|p| p.pattern_name.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let patterns = mock_patterns();
        let visible = filter_patterns(&patterns, "", None);
        assert_eq!(names(&visible), vec!["pqm", "Test", "NumericPattern", "VINPattern"]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let patterns = mock_patterns();
        let visible = filter_patterns(&patterns, "pattern", None);
        assert_eq!(names(&visible), vec!["NumericPattern", "VINPattern"]);

        let visible = filter_patterns(&patterns, "PATTERN", None);
        assert_eq!(names(&visible), vec!["NumericPattern", "VINPattern"]);
    }

    #[test]
    fn test_type_filter_matches_exactly() {
        let patterns = mock_patterns();
        let visible = filter_patterns(&patterns, "", Some(PatternType::Numeric));
        assert_eq!(names(&visible), vec!["NumericPattern"]);

        let visible = filter_patterns(&patterns, "", Some(PatternType::Boolean));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let patterns = mock_patterns();
        let visible = filter_patterns(&patterns, "e", Some(PatternType::Alphanumeric));
        assert_eq!(names(&visible), vec!["Test", "VINPattern"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let patterns = mock_patterns();
        let visible = filter_patterns(&patterns, "zzz", None);
        assert!(visible.is_empty());
    }
}
