//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the storefront with ratatui and maps keyboard
//! input onto application events.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
