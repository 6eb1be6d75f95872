use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Product identifier as sent by the catalog endpoint.
///
/// Any JSON number (negative and fractional included) or string is accepted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A single catalog entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(
        default,
        deserialize_with = "deserialize_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Rating>,
}

/// Rating is an optional extra, so a malformed one is dropped rather than
/// failing the whole product.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl Product {
    /// Price rendered the way the product cards show it.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Text and category criteria for the catalog view.
///
/// # Examples
///
/// ```
/// use storefront::domain::FilterCriteria;
///
/// let mut filter = FilterCriteria::default();
/// filter.toggle_category("home");
/// assert_eq!(filter.category.as_deref(), Some("home"));
/// filter.toggle_category("home");
/// assert!(filter.category.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively
    pub query: String,
    /// Selected category, `None` means all categories
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: Option<String>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Single-select toggle: selecting a label replaces any other selection,
    /// selecting the current label clears it.
    pub fn toggle_category(&mut self, label: &str) {
        if self.category.as_deref() == Some(label) {
            self.category = None;
        } else {
            self.category = Some(label.to_string());
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCriteria {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortCriteria {
    /// Cycles none -> ascending -> descending -> none.
    pub fn next(self) -> Self {
        match self {
            SortCriteria::None => SortCriteria::PriceAscending,
            SortCriteria::PriceAscending => SortCriteria::PriceDescending,
            SortCriteria::PriceDescending => SortCriteria::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriteria::None => "Default",
            SortCriteria::PriceAscending => "Price: Low to High",
            SortCriteria::PriceDescending => "Price: High to Low",
        }
    }
}
