//! Map a Shopify order file to an internal order.
//!
//! # Usage
//!
//! ```bash
//! # Pretty-print to stdout
//! om-cli map fixtures/shopify-order.json
//!
//! # Write compact JSON to a file
//! om-cli map fixtures/shopify-order.json --output internal.json --compact
//! ```

use std::io::Write;
use std::path::Path;

use order_mapper_core::{InternalOrder, OrderMapper};
use tracing::info;

use super::read_file;
use crate::error::CliError;

/// Map `input` and write the result to `output`, or stdout if `None`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the output
/// cannot be written.
pub async fn run(input: &Path, output: Option<&Path>, compact: bool) -> Result<(), CliError> {
    let source = read_file(input).await?;
    let order = OrderMapper::map_str(&source)?;

    info!(
        input = %input.display(),
        order_id = ?order.order_id,
        items = order.items.len(),
        "Mapped order"
    );

    let mut rendered = render(&order, compact)?;
    rendered.push('\n');

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .map_err(|e| CliError::io(path, e))?;
            info!(path = %path.display(), "Wrote internal order");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)?;
        }
    }

    Ok(())
}

/// Serialize an internal order, pretty unless `compact`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(order: &InternalOrder, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(order)
    } else {
        serde_json::to_string_pretty(order)
    }
}
