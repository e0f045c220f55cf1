//! Suggestion matching for the search field.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::dataset::Dataset;
use crate::models::Product;

/// Minimum combined similarity for the typo fallback to offer a product.
const MIN_SIMILARITY: f64 = 0.75;

/// How typed text is matched against product names.
///
/// Successive revisions of the search surface shipped both behaviors; prefix
/// matching is the current one and the default here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Name starts with the typed text.
    #[default]
    Prefix,
    /// Name contains the typed text anywhere.
    Substring,
}

impl MatchMode {
    fn matches(self, name: &str, needle_lower: &str) -> bool {
        let name_lower = name.to_lowercase();
        match self {
            MatchMode::Prefix => name_lower.starts_with(needle_lower),
            MatchMode::Substring => name_lower.contains(needle_lower),
        }
    }
}

/// All products matching the typed text, in dataset order.
pub(super) fn suggestions<'a>(
    dataset: &'a Dataset,
    search_text: &str,
    mode: MatchMode,
) -> Vec<&'a Product> {
    if search_text.is_empty() {
        return Vec::new();
    }
    let needle = search_text.to_lowercase();
    dataset
        .iter()
        .filter(|p| mode.matches(&p.product_name, &needle))
        .collect()
}

/// Single best product by name similarity, for a "did you mean" hint when
/// the suggestion list comes back empty.
pub(super) fn closest_name<'a>(dataset: &'a Dataset, search_text: &str) -> Option<&'a Product> {
    if search_text.is_empty() {
        return None;
    }
    let needle = search_text.to_lowercase();
    dataset
        .iter()
        .map(|p| (p, name_similarity(&needle, &p.product_name.to_lowercase())))
        .filter(|&(_, score)| score >= MIN_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(p, _)| p)
}

/// Combined similarity: Jaro-Winkler favors shared prefixes, Levenshtein the
/// overall shape.
fn name_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Product {
        Product {
            product_name: name.into(),
            ..Product::default()
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            named("Amoxicap 500"),
            named("Gastrel"),
            named("amoxil 250"),
            named("Neuromax"),
        ])
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let dataset = sample();
        assert!(suggestions(&dataset, "", MatchMode::Prefix).is_empty());
        assert!(suggestions(&dataset, "", MatchMode::Substring).is_empty());
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let dataset = sample();
        let names: Vec<&str> = suggestions(&dataset, "AMOX", MatchMode::Prefix)
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Amoxicap 500", "amoxil 250"]);
    }

    #[test]
    fn test_prefix_does_not_match_interior_text() {
        let dataset = sample();
        assert!(suggestions(&dataset, "max", MatchMode::Prefix).is_empty());
    }

    #[test]
    fn test_substring_mode_matches_interior_text() {
        let dataset = sample();
        let names: Vec<&str> = suggestions(&dataset, "max", MatchMode::Substring)
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Neuromax"]);
    }

    #[test]
    fn test_dataset_order_preserved() {
        let dataset = Dataset::new(vec![named("ab"), named("ac"), named("aa")]);
        let names: Vec<&str> = suggestions(&dataset, "a", MatchMode::Prefix)
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["ab", "ac", "aa"]);
    }

    #[test]
    fn test_missing_name_never_matches() {
        let dataset = Dataset::new(vec![Product::default(), named("Amoxicap 500")]);
        let matches = suggestions(&dataset, "amox", MatchMode::Prefix);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_closest_name_tolerates_typo() {
        let dataset = sample();
        let hit = closest_name(&dataset, "amoxicpa 500").unwrap();
        assert_eq!(hit.product_name, "Amoxicap 500");
    }

    #[test]
    fn test_closest_name_has_a_floor() {
        let dataset = sample();
        assert!(closest_name(&dataset, "zzzzzzzz").is_none());
        assert!(closest_name(&dataset, "").is_none());
    }
}
