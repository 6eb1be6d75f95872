//! Storefront - Terminal Catalog Browser Library
//!
//! Loads a product catalog once and derives paginated, filtered and sorted
//! views of it for a terminal front end.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
