//! Error types for the visualizer
//!
//! The sorting and geometry code is total over its inputs. Only the edges of
//! the program can fail: terminal I/O, the optional log file, and validation
//! of the startup configuration.

use thiserror::Error;

/// Errors surfaced to `main`
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup parameters cannot produce a drawable array
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The global tracing subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl VisualizerError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        VisualizerError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
