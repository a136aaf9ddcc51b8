//! Integration tests for the Shopify order mapper.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-mapper-integration-tests
//! ```
//!
//! # Fixtures
//!
//! - `shopify-order.json` - Full REST order with customer, addresses, items
//! - `internal-order.json` - Expected mapping of `shopify-order.json`
//! - `guest-order.json` - Order without customer or shipping address

use std::path::PathBuf;

/// Absolute path of a file under `fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Read a fixture as text.
///
/// # Errors
///
/// Returns an error if the fixture does not exist or is not UTF-8.
pub fn load_fixture(name: &str) -> std::io::Result<String> {
    std::fs::read_to_string(fixture_path(name))
}

/// Read and parse a JSON fixture.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or is not valid JSON.
pub fn load_json(name: &str) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&load_fixture(name)?)?)
}
