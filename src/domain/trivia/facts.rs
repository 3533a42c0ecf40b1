//! Per-language trivia facts and uniform selection.

use std::collections::HashMap;

/// Static facts keyed by language prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactCatalog {
    facts: HashMap<String, Vec<String>>,
}

impl FactCatalog {
    pub fn new(facts: HashMap<String, Vec<String>>) -> Self {
        let facts = facts
            .into_iter()
            .map(|(language, list)| (language.to_ascii_lowercase(), list))
            .collect();
        Self { facts }
    }

    /// Facts for `language`, or `None` when the language has none.
    pub fn facts_for(&self, language: &str) -> Option<&[String]> {
        self.facts
            .get(language)
            .map(Vec::as_slice)
            .filter(|facts| !facts.is_empty())
    }

    /// Language prefixes in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.facts.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Picks the fact at `floor(sample * len)` for `language`.
    pub fn pick(&self, language: &str, sample: f64) -> Option<&str> {
        let facts = self.facts_for(language)?;
        let index = select_index(sample, facts.len())?;
        facts.get(index).map(String::as_str)
    }
}

/// Maps a uniform sample in `[0, 1)` onto an index in `[0, len)`.
///
/// Samples outside the unit interval are clamped so the result is always a
/// valid index. Returns `None` for an empty list.
pub fn select_index(sample: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let sample = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(0.0, 1.0)
    };
    let index = (sample * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> FactCatalog {
        let mut facts = HashMap::new();
        facts.insert(
            "en".to_string(),
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
        );
        facts.insert("es".to_string(), Vec::new());
        FactCatalog::new(facts)
    }

    #[test]
    fn zero_selects_first_index() {
        assert_eq!(select_index(0.0, 8), Some(0));
    }

    #[test]
    fn sample_just_below_one_selects_last_index() {
        let below_one = 1.0 - f64::EPSILON;
        assert_eq!(select_index(below_one, 8), Some(7));
    }

    #[test]
    fn sample_selects_floor_of_scaled_value() {
        assert_eq!(select_index(0.5, 8), Some(4));
        assert_eq!(select_index(0.49, 8), Some(3));
    }

    #[test]
    fn empty_list_has_no_index() {
        assert_eq!(select_index(0.3, 0), None);
    }

    #[test]
    fn out_of_range_samples_are_clamped() {
        assert_eq!(select_index(1.0, 4), Some(3));
        assert_eq!(select_index(-0.5, 4), Some(0));
        assert_eq!(select_index(f64::NAN, 4), Some(0));
    }

    #[test]
    fn pick_uses_language_list() {
        let catalog = catalog();
        assert_eq!(catalog.pick("en", 0.0), Some("one"));
        assert_eq!(catalog.pick("en", 0.99), Some("three"));
    }

    #[test]
    fn empty_language_list_is_treated_as_absent() {
        let catalog = catalog();
        assert!(catalog.facts_for("es").is_none());
        assert!(catalog.pick("fr", 0.1).is_none());
    }

    proptest! {
        #[test]
        fn selected_index_matches_floor(r in 0.0f64..1.0, len in 1usize..500) {
            let index = select_index(r, len).unwrap();
            prop_assert!(index < len);
            let expected = ((r * len as f64).floor() as usize).min(len - 1);
            prop_assert_eq!(index, expected);
        }
    }
}
