//! Subcommand implementations.

pub mod bench;
pub mod compare;
pub mod map;

use std::path::Path;

use crate::error::CliError;

/// Read a whole file as UTF-8 text.
async fn read_file(path: &Path) -> Result<String, CliError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::io(path, e))
}
