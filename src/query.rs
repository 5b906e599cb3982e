//! Search filter over the catalog
//!
//! Case-insensitive substring match on the name, or exact match on the
//! character itself so a pasted emoji finds its own tile.

use crate::catalog::{Catalog, CatalogEntry};

/// Normalized search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    lowered: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Whether `entry` belongs in the results for this query
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if self.is_empty() {
            return true;
        }
        entry.name.contains(&self.lowered) || self.is_character(entry.character)
    }

    fn is_character(&self, c: char) -> bool {
        let mut chars = self.raw.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

/// Entries matching `query`, in catalog order. An empty query returns
/// the whole catalog.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CatalogEntry> {
    let query = Query::new(query);
    if query.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|e| query.matches(e)).collect()
}

/// Indices into the catalog instead of references, for front ends that
/// keep their results alongside the catalog they index.
pub fn filter_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    let query = Query::new(query);
    catalog
        .iter()
        .enumerate()
        .filter(|(_, e)| query.matches(e))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CodeRange;
    use std::collections::HashMap;

    fn sample() -> Catalog {
        let names: HashMap<u32, String> = [
            (0x1F600, "GRINNING FACE"),
            (0x1F601, "GRINNING FACE WITH SMILING EYES"),
            (0x1F602, "FACE WITH TEARS OF JOY"),
            (0x1F680, "ROCKET"),
            (0x1F34E, "RED APPLE"),
        ]
        .iter()
        .map(|&(cp, n)| (cp, n.to_string()))
        .collect();
        let ranges = [
            CodeRange::span(0x1F600, 0x1F602),
            CodeRange::span(0x1F680, 0x1F680),
            CodeRange::span(0x1F34E, 0x1F34E),
        ];
        Catalog::build_with(&ranges, &names)
    }

    fn code_points(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.code_point()).collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let catalog = sample();
        let all = filter(&catalog, "");
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
        assert_eq!(filter_indices(&catalog, ""), (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn joy_finds_tears_of_joy() {
        let catalog = sample();
        assert_eq!(code_points(&filter(&catalog, "joy")), vec![0x1F602]);
    }

    #[test]
    fn no_match_is_empty() {
        let catalog = sample();
        assert!(filter(&catalog, "zzz").is_empty());
        assert!(filter_indices(&catalog, "zzz").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(code_points(&filter(&catalog, "ROCKET")), vec![0x1F680]);
        assert_eq!(code_points(&filter(&catalog, "Grinning")), vec![0x1F600, 0x1F601]);
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = sample();
        // Faces first, then the rest by code point
        assert_eq!(
            code_points(&filter(&catalog, "r")),
            vec![0x1F600, 0x1F601, 0x1F602, 0x1F34E, 0x1F680]
        );
        assert_eq!(
            code_points(&filter(&catalog, "face")),
            vec![0x1F600, 0x1F601, 0x1F602]
        );
    }

    #[test]
    fn multi_word_queries_are_contiguous_substrings() {
        let catalog = sample();
        assert_eq!(code_points(&filter(&catalog, "tears of joy")), vec![0x1F602]);
        assert!(filter(&catalog, "joy tears").is_empty());
        assert_eq!(code_points(&filter(&catalog, "face ")), vec![0x1F601, 0x1F602]);
    }

    #[test]
    fn pasted_emoji_finds_itself() {
        let catalog = sample();
        assert_eq!(code_points(&filter(&catalog, "\u{1F680}")), vec![0x1F680]);
        // A longer string containing the emoji is not an exact character match
        assert!(filter(&catalog, "\u{1F680}\u{1F680}").is_empty());
    }

    #[test]
    fn every_result_satisfies_the_predicate() {
        let catalog = sample();
        for q in ["a", "face", "with", "ing", "\u{1F600}", "x"] {
            let query = Query::new(q);
            let hits = filter(&catalog, q);
            assert!(hits.iter().all(|e| query.matches(e)));
            let expected = catalog.iter().filter(|e| query.matches(e)).count();
            assert_eq!(hits.len(), expected);
        }
    }

    #[test]
    fn indices_agree_with_entries() {
        let catalog = sample();
        let by_ref = filter(&catalog, "grin");
        let by_idx: Vec<&CatalogEntry> = filter_indices(&catalog, "grin")
            .into_iter()
            .filter_map(|i| catalog.get(i))
            .collect();
        assert_eq!(by_ref, by_idx);
    }
}
