//! The filter engine: reduces the catalog to the visible subset.
//!
//! Filtering is a pure linear scan. The catalog holds ~58 entries, so
//! there is nothing to index or cache; every call recomputes from scratch
//! and preserves catalog order.

use crate::catalog::ElementEntry;

/// Category criterion for a filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every category.
    All,
    /// Match entries whose category equals the label exactly.
    /// An unknown label matches nothing; that is policy, not an error.
    Named(String),
}

impl CategoryFilter {
    /// Build a filter from an optional CLI argument.
    pub fn from_option(category: Option<String>) -> Self {
        match category {
            Some(label) => CategoryFilter::Named(label),
            None => CategoryFilter::All,
        }
    }

    fn accepts(&self, entry: &ElementEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(label) => entry.category == label,
        }
    }
}

/// Select the entries visible under the given criteria.
///
/// An entry is kept when its category passes `category` and its tag or
/// description contains `search_text` case-insensitively. Empty search
/// text matches every entry. The result is an ordered subsequence of
/// `entries`; an empty result is a valid outcome, not an error.
pub fn filter_entries<'a>(
    entries: &'a [ElementEntry],
    search_text: &str,
    category: &CategoryFilter,
) -> Vec<&'a ElementEntry> {
    let needle = search_text.to_lowercase();
    entries
        .iter()
        .filter(|entry| category.accepts(entry) && matches_text(entry, &needle))
        .collect()
}

/// Case-insensitive substring match against tag or description.
/// `needle` must already be lowercased.
fn matches_text(entry: &ElementEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.tag.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_empty_criteria_return_whole_catalog() {
        let all = filter_entries(catalog::entries(), "", &CategoryFilter::All);
        assert_eq!(all.len(), catalog::entries().len());
    }

    #[test]
    fn test_tag_substring_match() {
        let hits = filter_entries(catalog::entries(), "img", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "<img>");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let hits = filter_entries(catalog::entries(), "H1", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "<h1>");
    }

    #[test]
    fn test_description_substring_match() {
        // "hiperlink" only appears in the <a> description, not in any tag.
        let hits = filter_entries(catalog::entries(), "hiperlink", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "<a>");
    }

    #[test]
    fn test_category_exact_match() {
        let category = CategoryFilter::Named("Tabelas".to_string());
        let hits = filter_entries(catalog::entries(), "", &category);
        let tags: Vec<_> = hits.iter().map(|e| e.tag).collect();
        assert_eq!(
            tags,
            ["<table>", "<tr>", "<td>", "<th>", "<thead>", "<tbody>", "<tfoot>"]
        );
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let category = CategoryFilter::Named("Texto".to_string());
        let hits = filter_entries(catalog::entries(), "negrito", &category);
        let tags: Vec<_> = hits.iter().map(|e| e.tag).collect();
        assert_eq!(tags, ["<strong>", "<b>"]);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let hits = filter_entries(catalog::entries(), "zzzznotfound", &CategoryFilter::All);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let category = CategoryFilter::Named("Quantum".to_string());
        let hits = filter_entries(catalog::entries(), "", &category);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CategoryFilter::from_option(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_option(Some("Listas".into())),
            CategoryFilter::Named("Listas".into())
        );
    }
}
