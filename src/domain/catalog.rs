//! The in-memory product catalog.
//!
//! Holds every product in source order together with the distinct category
//! labels, which are kept in the order they were first seen.

use super::errors::{LoadError, LoadResult};
use super::models::Product;
use serde_json::Value;
use std::collections::HashSet;

/// Full product list plus the derived category set.
///
/// # Examples
///
/// ```
/// use storefront::domain::CatalogStore;
///
/// let mut store = CatalogStore::default();
/// store.load_str(r#"[
///     {"id": 1, "title": "Mug", "price": 10, "description": "", "category": "home", "image": ""},
///     {"id": 2, "title": "Shirt", "price": 20, "description": "", "category": "clothing", "image": ""},
///     {"id": 3, "title": "Lamp", "price": 30, "description": "", "category": "home", "image": ""}
/// ]"#).unwrap();
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.categories(), ["home", "clothing"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl CatalogStore {
    /// Replaces the catalog with the products in `raw`.
    ///
    /// `raw` must be a JSON array of product records. Every record is checked
    /// before anything is replaced, so a failed load leaves the store as it was.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the payload is not an array, a record is
    /// missing a field or has the wrong shape, or a price is negative or not finite.
    pub fn load(&mut self, raw: Value) -> LoadResult<()> {
        let Value::Array(records) = raw else {
            return Err(LoadError::NotAnArray);
        };

        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let product: Product = serde_json::from_value(record)
                .map_err(|source| LoadError::InvalidProduct { index, source })?;
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(LoadError::InvalidPrice {
                    index,
                    price: product.price,
                });
            }
            products.push(product);
        }

        self.categories = Self::collect_categories(&products);
        self.products = products;
        tracing::debug!(categories = ?self.categories, "categories populated");
        Ok(())
    }

    /// Parses `text` as JSON and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for unparseable text, otherwise whatever
    /// [`CatalogStore::load`] reports.
    pub fn load_str(&mut self, text: &str) -> LoadResult<()> {
        let raw: Value = serde_json::from_str(text)?;
        self.load(raw)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn collect_categories(products: &[Product]) -> Vec<String> {
        let mut seen = HashSet::new();
        products
            .iter()
            .filter(|product| seen.insert(product.category.as_str()))
            .map(|product| product.category.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64, title: &str, category: &str, price: f64) -> Value {
        json!({
            "id": id,
            "title": title,
            "price": price,
            "description": format!("{} description", title),
            "category": category,
            "image": format!("https://example.com/{}.jpg", id),
        })
    }

    #[test]
    fn test_store_starts_empty() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn test_load_preserves_source_order() {
        let mut store = CatalogStore::default();
        store
            .load(json!([
                record(3, "C", "b", 3.0),
                record(1, "A", "a", 1.0),
                record(2, "B", "b", 2.0),
            ]))
            .unwrap();

        let titles: Vec<&str> = store.all().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let mut store = CatalogStore::default();
        store
            .load(json!([
                record(1, "A", "electronics", 1.0),
                record(2, "B", "jewelery", 1.0),
                record(3, "C", "electronics", 1.0),
                record(4, "D", "women's clothing", 1.0),
                record(5, "E", "jewelery", 1.0),
            ]))
            .unwrap();

        assert_eq!(
            store.categories(),
            ["electronics", "jewelery", "women's clothing"]
        );
    }

    #[test]
    fn test_load_rejects_non_array() {
        let mut store = CatalogStore::default();
        let result = store.load(json!({ "products": [] }));
        assert!(matches!(result, Err(LoadError::NotAnArray)));
    }

    #[test]
    fn test_load_rejects_missing_field() {
        let mut store = CatalogStore::default();
        let result = store.load(json!([
            record(1, "A", "a", 1.0),
            { "id": 2, "title": "No category", "price": 1.0, "description": "", "image": "" },
        ]));
        assert!(matches!(result, Err(LoadError::InvalidProduct { index: 1, .. })));
    }

    #[test]
    fn test_load_rejects_negative_price() {
        let mut store = CatalogStore::default();
        let result = store.load(json!([record(1, "A", "a", -5.0)]));
        assert!(matches!(result, Err(LoadError::InvalidPrice { index: 0, .. })));
    }

    #[test]
    fn test_failed_load_keeps_previous_catalog() {
        let mut store = CatalogStore::default();
        store.load(json!([record(1, "A", "a", 1.0)])).unwrap();

        assert!(store.load(json!("not a list")).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.categories(), ["a"]);
    }

    #[test]
    fn test_load_str_rejects_invalid_json() {
        let mut store = CatalogStore::default();
        let result = store.load_str("[{ not json");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_accepts_negative_and_fractional_ids() {
        let mut store = CatalogStore::default();
        let mut negative = record(1, "A", "a", 1.0);
        negative["id"] = json!(-3);
        let mut fractional = record(2, "B", "a", 2.0);
        fractional["id"] = json!(1.5);

        store.load(json!([negative, fractional])).unwrap();
        let ids: Vec<String> = store.all().iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["-3", "1.5"]);
    }

    #[test]
    fn test_load_drops_partial_rating() {
        let mut store = CatalogStore::default();
        let mut partial = record(1, "A", "a", 1.0);
        partial["rating"] = json!({ "rate": 4.1 });
        let mut complete = record(2, "B", "a", 2.0);
        complete["rating"] = json!({ "rate": 3.5, "count": 7 });

        store.load(json!([partial, complete])).unwrap();
        assert!(store.all()[0].rating.is_none());
        assert_eq!(store.all()[1].rating.as_ref().map(|r| r.count), Some(7));
    }

    #[test]
    fn test_load_empty_list() {
        let mut store = CatalogStore::default();
        store.load_str("[]").unwrap();
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
    }
}
