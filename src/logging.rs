//! Log initialization.
//!
//! The TUI owns the terminal, so logs go to a file under the data
//! directory. Filtering follows `RUST_LOG`, defaulting to `info`.

use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize tracing to the log file. Call once, before the TUI starts.
pub fn init() -> Result<()> {
    let path = crate::storage::log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err(format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to initialize logging: {e}"))?;

    tracing::info!("logging initialized");
    Ok(())
}
