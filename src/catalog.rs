//! Static catalog data: item categories and the mock product lookup.

/// Known item -> category table. Declared data, fixed for the process lifetime.
const CATEGORIES: &[(&str, &str)] = &[
    ("milk", "dairy"),
    ("cheese", "dairy"),
    ("yogurt", "dairy"),
    ("apple", "fruits"),
    ("banana", "fruits"),
    ("orange", "fruits"),
    ("bread", "bakery"),
    ("rice", "grains"),
    ("water", "beverages"),
];

/// Category assigned to anything outside the table.
pub const FALLBACK_CATEGORY: &str = "others";

/// Direct table lookup. No failure mode; unknown items land in `"others"`.
pub fn category_of(item: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Product-search collaborator. A real catalog backend can replace the mock
/// without the command processor noticing.
pub trait ProductLookup {
    /// Returns the spoken result for a matching product, or `None` when the
    /// query matches nothing.
    fn find(&self, query: &str) -> Option<String>;
}

/// Stub catalog: recognises apples only.
pub struct MockCatalog;

impl ProductLookup for MockCatalog {
    fn find(&self, query: &str) -> Option<String> {
        if query.contains("apple") {
            Some("I found organic apples for three point five dollars per kilo.".to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_items_map_to_their_category() {
        assert_eq!(category_of("milk"), "dairy");
        assert_eq!(category_of("banana"), "fruits");
        assert_eq!(category_of("rice"), "grains");
    }

    #[test]
    fn unknown_items_fall_back_to_others() {
        // "apples" is not a key; only the singular form is
        assert_eq!(category_of("apples"), "others");
        assert_eq!(category_of("chainsaw"), "others");
    }

    #[test]
    fn mock_lookup_only_knows_apples() {
        let catalog = MockCatalog;
        assert!(catalog.find("find apples under 5").is_some());
        assert!(catalog.find("search for dragonfruit").is_none());
    }
}
