//! Domain layer: products, the catalog store, the view pipeline and paging.

pub mod models;
pub mod catalog;
pub mod services;
pub mod pagination;
pub mod errors;

pub use models::*;
pub use catalog::*;
pub use services::*;
pub use pagination::*;
pub use errors::*;
