//! Product catalog and search.
//!
//! The catalog is static and lives in memory. Search is deliberately naive:
//! an exact category match plus a case-sensitive substring match on the
//! product name. `"mario"` does not find `"Mario Clone"`.

use qa_playground_core::{Category, CategoryFilter, Product, ProductId};

use super::Notice;

/// The static product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// A catalog holding `products`.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Every product, in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by exact id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Filter by category, then by literal substring of the name.
    ///
    /// An empty query keeps everything the category filter kept.
    #[must_use]
    pub fn search(&self, query: &str, category: &CategoryFilter) -> SearchResult {
        let products = self
            .products
            .iter()
            .filter(|p| category.matches(p.category))
            .filter(|p| query.is_empty() || p.name.contains(query))
            .cloned()
            .collect();

        SearchResult { products }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("p1", "Space Battle", Category::Games, 399),
            Product::new("p2", "Mario Clone", Category::Games, 499),
            Product::new("p3", "Web Starter", Category::Edu, 299),
            Product::new("p4", "QA Basics", Category::Edu, 199),
            Product::new("p5", "Keyboard Pro", Category::Gadgets, 699),
            Product::new("p6", "Mouse Mini", Category::Gadgets, 349),
        ])
    }
}

/// Products matching a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub products: Vec<Product>,
}

impl SearchResult {
    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The count message, or the distinct "nothing found" failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        if self.is_empty() {
            Notice::err("Nothing found. Try a different query.")
        } else {
            Notice::ok(format!("Products found: {}", self.products.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let catalog = Catalog::default();
        let result = catalog.search("", &CategoryFilter::All);
        assert_eq!(ids(&result), vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
        assert_eq!(result.notice(), Notice::ok("Products found: 6"));
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let catalog = Catalog::default();
        assert!(catalog.search("mario", &CategoryFilter::All).is_empty());
        assert_eq!(
            ids(&catalog.search("Mario", &CategoryFilter::All)),
            vec!["p2"]
        );
    }

    #[test]
    fn test_substring_anywhere_in_name() {
        let catalog = Catalog::default();
        assert_eq!(
            ids(&catalog.search("o", &CategoryFilter::All)),
            vec!["p2", "p5", "p6"]
        );
        assert!(catalog.search(" mario", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_then_query() {
        let catalog = Catalog::default();
        let edu = CategoryFilter::Only(Category::Edu);
        assert_eq!(ids(&catalog.search("", &edu)), vec!["p3", "p4"]);
        assert_eq!(ids(&catalog.search("QA", &edu)), vec!["p4"]);
        assert!(catalog.search("Mario", &edu).is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = Catalog::default();
        let result = catalog.search("", &CategoryFilter::parse("books"));
        assert!(result.is_empty());
        assert_eq!(
            result.notice(),
            Notice::err("Nothing found. Try a different query.")
        );
    }

    #[test]
    fn test_find_by_exact_id() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.find(&ProductId::from("p5")).map(|p| p.name.as_str()),
            Some("Keyboard Pro")
        );
        assert!(catalog.find(&ProductId::from("P5")).is_none());
    }
}
