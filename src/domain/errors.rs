use thiserror::Error;

/// A catalog payload that cannot be turned into products.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Catalog payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog payload is not a list of products")]
    NotAnArray,
    #[error("Product at index {index} is malformed: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Product at index {index} has an invalid price: {price}")]
    InvalidPrice { index: usize, price: f64 },
}

pub type LoadResult<T> = Result<T, LoadError>;
