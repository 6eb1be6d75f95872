//! Catalog view pipeline.
//!
//! Derives the displayed product sequence from the full catalog in three fixed
//! stages: text filter, category filter, then price sort. The pipeline is pure;
//! it borrows the catalog and never mutates or copies products.

use super::models::{FilterCriteria, Product, SortCriteria};
use std::cmp::Ordering;

/// Computes the filtered view of `products` for the given criteria.
///
/// The result preserves catalog order unless a price sort is requested, and
/// the sort is stable so equally priced products keep their relative order.
/// No matches is a valid result and yields an empty vector.
///
/// # Examples
///
/// ```
/// use storefront::domain::{CatalogStore, FilterCriteria, SortCriteria, compute_view};
///
/// let mut store = CatalogStore::default();
/// store.load_str(r#"[
///     {"id": 1, "title": "Red Shirt", "price": 20, "description": "", "category": "clothing", "image": ""},
///     {"id": 2, "title": "Blue Mug", "price": 10, "description": "", "category": "home", "image": ""},
///     {"id": 3, "title": "Green Shirt", "price": 15, "description": "", "category": "clothing", "image": ""}
/// ]"#).unwrap();
///
/// let filter = FilterCriteria::new("shirt", None);
/// let view = compute_view(store.all(), &filter, SortCriteria::PriceAscending);
/// let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
/// assert_eq!(titles, ["Green Shirt", "Red Shirt"]);
/// ```
pub fn compute_view<'a>(
    products: &'a [Product],
    filter: &FilterCriteria,
    sort: SortCriteria,
) -> Vec<&'a Product> {
    let query = filter.query.to_lowercase();
    let category = filter.category.as_deref();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|product| matches_lowercased_query(product, &query))
        .filter(|product| matches_category(product, category))
        .collect();

    // slice::sort_by is stable, ties keep their filtered order
    match sort {
        SortCriteria::None => {}
        SortCriteria::PriceAscending => view.sort_by(|a, b| compare_price(a, b)),
        SortCriteria::PriceDescending => view.sort_by(|a, b| compare_price(b, a)),
    }

    view
}

/// True if `query` is empty or appears, case-insensitively, in the title,
/// description or category of `product`.
pub fn matches_query(product: &Product, query: &str) -> bool {
    matches_lowercased_query(product, &query.to_lowercase())
}

/// True if no category is selected or the product's category equals it exactly.
pub fn matches_category(product: &Product, category: Option<&str>) -> bool {
    category.is_none_or(|selected| product.category == selected)
}

fn matches_lowercased_query(product: &Product, query: &str) -> bool {
    query.is_empty()
        || product.title.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
        || product.category.to_lowercase().contains(query)
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    // Prices are validated finite on load
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}
