//! Catalog filtering.

use super::models::{Category, Product};

/// Filters a catalog by category and free-text query.
///
/// A product matches when both predicates hold:
///
/// * `category` is `All`, or equals the product's category.
/// * `query` is empty, or is a case-insensitive substring of the product's
///   name or description.
///
/// Case folding uses Unicode lowercasing, independent of the process locale.
/// Returns a fresh list each call, preserving catalog order among matches;
/// an empty result is a valid outcome.
pub fn filter_products(products: &[Product], category: Category, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            let matches_category = category == Category::All || p.category == category;
            let matches_query = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle);
            matches_category && matches_query
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    #[test]
    fn all_category_with_empty_query_returns_catalog_unchanged() {
        let catalog = seed_products();
        let filtered = filter_products(&catalog, Category::All, "");
        assert_eq!(filtered, catalog, "no restriction must preserve the full catalog in order");
    }

    #[test]
    fn category_restricts_matches() {
        let catalog = seed_products();
        let filtered = filter_products(&catalog, Category::Fashion, "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == Category::Fashion));
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = seed_products();
        let filtered = filter_products(&catalog, Category::All, "WATCH");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Smart Ultra Watch v2");
    }

    #[test]
    fn query_matches_description_too() {
        let catalog = seed_products();
        // "oled" appears only in the smartwatch description, not its name.
        let filtered = filter_products(&catalog, Category::All, "oled");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn category_and_query_must_both_hold() {
        let catalog = seed_products();
        // "watch" matches an Electronics product, so a Fashion filter excludes it.
        let filtered = filter_products(&catalog, Category::Fashion, "watch");
        assert!(filtered.is_empty());
    }

    #[test]
    fn unmatched_query_yields_empty_result() {
        let catalog = seed_products();
        let filtered = filter_products(&catalog, Category::All, "no such product");
        assert!(filtered.is_empty());
    }

    #[test]
    fn matches_preserve_catalog_order() {
        let catalog = seed_products();
        let filtered = filter_products(&catalog, Category::Gadgets, "");
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "8"]);
    }
}
