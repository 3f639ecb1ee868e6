//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so logs go either to stderr or to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` wins over `level` when set.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter, the log file cannot be
/// created, or a subscriber is already installed.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
