//! Unified error handling for the CLI.

use std::path::PathBuf;

use order_mapper_core::MapError;
use thiserror::Error;

use crate::config::ConfigError;

/// Command-level error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("Output error: {0}")]
    Stdout(#[source] std::io::Error),

    /// Mapping failed.
    #[error("Mapping error: {0}")]
    Map(#[from] MapError),

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bench parameters are unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A bench worker task failed to complete.
    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// Mapped output differs from the expected output.
    #[error("{count} field(s) differ from expected output")]
    Mismatch { count: usize },
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
