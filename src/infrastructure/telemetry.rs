//! Structured logging setup.
//!
//! The terminal belongs to the UI, so log lines only go to a file. Without a
//! log file no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a JSON subscriber writing to `log_file`, filtered by `RUST_LOG`.
///
/// Safe to call multiple times; only the first installed subscriber wins.
///
/// # Errors
///
/// Returns an IO error if the log file cannot be opened for appending.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
