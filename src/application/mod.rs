//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it owns the catalog, the current criteria and the pagination cursor.

pub mod state;

pub use state::*;
