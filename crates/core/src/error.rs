//! Errors raised at the mapping entry point.

use thiserror::Error;

/// Errors returned by [`OrderMapper`](crate::OrderMapper) entry points.
///
/// Missing nested objects, leaves, or empty sequences are never errors; they
/// map to `null` or `[]`.
#[derive(Debug, Error)]
pub enum MapError {
    /// The entry point was called without an order.
    #[error("no input provided (received {received})")]
    MissingInput {
        /// Description of what the caller actually passed.
        received: String,
    },

    /// The input is not a Shopify order payload.
    #[error("invalid order payload: {0}")]
    Decode(#[from] serde_json::Error),
}
