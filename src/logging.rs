//! File logging via `tracing`.
//!
//! The terminal is owned by the chart, so log output can only go to a file.
//! Setting `SORTVIZ_LOG=<path>` turns logging on; `RUST_LOG` picks the filter
//! and defaults to `info`.

use crate::config::LOG_FILE_ENV;
use crate::error::{Result, VisualizerError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the log file path from the environment
pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Install a global subscriber appending to `path`
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| VisualizerError::Logging(e.to_string()))
}

/// Initialise logging if the environment asks for it.
///
/// Returns the path being logged to, if any.
pub fn init_from_env() -> Result<Option<PathBuf>> {
    match log_file_from_env() {
        Some(path) => {
            init_file_logging(&path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
