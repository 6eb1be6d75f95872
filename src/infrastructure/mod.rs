//! Infrastructure layer providing external service integrations.
//!
//! Catalog retrieval over HTTP or from disk, environment configuration
//! and log output.

pub mod source;
pub mod config;
pub mod telemetry;

pub use source::*;
pub use config::*;
