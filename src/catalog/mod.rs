//! The compiled-in element catalog.
//!
//! Everything the guide displays lives here as static data:
//!
//! - [`ElementEntry`] - one documented HTML element
//! - [`entries`] - the full catalog, in authoring order
//! - [`categories`] - distinct category labels, first-occurrence order
//! - [`CodeSample`] - the named static code samples shown on the samples view
//!
//! The catalog is immutable for the process lifetime; display order is
//! always authoring order.

mod elements;
mod samples;

use serde::Serialize;
use std::sync::OnceLock;

/// One documented HTML element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementEntry {
    /// Literal markup form shown to the user, e.g. `"<img>"`.
    pub tag: &'static str,
    pub description: &'static str,
    /// Grouping label; many entries share one category.
    pub category: &'static str,
    /// Single illustrative code line, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
    /// Common attributes, in documentation order.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub attributes: &'static [&'static str],
}

/// A named static code sample, shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    /// CLI-facing name (`basic`, `css`).
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
}

impl CodeSample {
    /// Look up a sample by its CLI-facing name.
    pub fn find(name: &str) -> Option<&'static CodeSample> {
        samples().iter().find(|s| s.name == name)
    }
}

/// All catalog entries, in authoring order.
pub fn entries() -> &'static [ElementEntry] {
    elements::ELEMENTS
}

/// Distinct category labels in first-occurrence order.
pub fn categories() -> &'static [&'static str] {
    static CATEGORIES: OnceLock<Vec<&'static str>> = OnceLock::new();
    CATEGORIES.get_or_init(|| {
        let mut labels: Vec<&'static str> = Vec::new();
        for entry in elements::ELEMENTS {
            if !labels.contains(&entry.category) {
                labels.push(entry.category);
            }
        }
        labels
    })
}

/// The static code samples, in display order.
pub fn samples() -> &'static [CodeSample] {
    samples::SAMPLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        assert!(entries().len() > 50);
    }

    #[test]
    fn test_descriptions_nonempty() {
        for entry in entries() {
            assert!(!entry.description.is_empty(), "{} has no description", entry.tag);
            assert!(!entry.tag.is_empty());
        }
    }

    #[test]
    fn test_categories_are_distinct() {
        let cats = categories();
        for (i, c) in cats.iter().enumerate() {
            assert!(!cats[i + 1..].contains(c), "duplicate category {c}");
        }
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        // Each label must appear in the catalog before any later label does.
        let cats = categories();
        let first_index = |label: &str| {
            entries()
                .iter()
                .position(|e| e.category == label)
                .expect("category not in catalog")
        };
        for pair in cats.windows(2) {
            assert!(first_index(pair[0]) < first_index(pair[1]));
        }
    }

    #[test]
    fn test_every_entry_category_is_known() {
        for entry in entries() {
            assert!(categories().contains(&entry.category));
        }
    }

    #[test]
    fn test_table_category_has_seven_entries() {
        let count = entries().iter().filter(|e| e.category == "Tabelas").count();
        assert_eq!(count, 7);
    }

    #[test]
    fn test_sample_lookup() {
        assert!(CodeSample::find("basic").is_some());
        assert!(CodeSample::find("css").is_some());
        assert!(CodeSample::find("javascript").is_none());
    }

    #[test]
    fn test_samples_shown_verbatim() {
        let basic = CodeSample::find("basic").unwrap();
        assert!(basic.content.starts_with("<!DOCTYPE html>"));
        // The nav links use fragment anchors; the blob must carry them
        // through to the closing tag intact.
        assert!(basic.content.contains("<a href=\"#inicio\">Início</a>"));
        assert!(basic.content.contains("<a href=\"#sobre\">Sobre</a>"));
        assert!(basic.content.ends_with("</html>"));
        let css = CodeSample::find("css").unwrap();
        assert!(css.content.contains("font-family"));
        assert!(css.content.ends_with("}"));
    }
}
