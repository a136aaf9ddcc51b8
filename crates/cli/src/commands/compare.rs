//! Compare mapped output against a reference output.
//!
//! The reference is typically produced by another mapping engine (a JOLT
//! spec, an ISL script) or by an earlier run of `om-cli map`. Comparison is
//! per top-level key of the internal order; key order is irrelevant.
//!
//! # Usage
//!
//! ```bash
//! om-cli compare fixtures/shopify-order.json fixtures/internal-order.json
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use order_mapper_core::OrderMapper;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::read_file;
use crate::error::CliError;

/// A top-level key whose value differs between the two outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDiff {
    pub key: String,
    /// Value produced by the mapper, `None` if the key is missing.
    pub actual: Option<Value>,
    /// Value in the reference output, `None` if the key is missing.
    pub expected: Option<Value>,
}

/// Map `input` and compare against the JSON in `expected`.
///
/// # Errors
///
/// Returns [`CliError::Mismatch`] if any field differs, or an error if either
/// file cannot be read or decoded.
pub async fn run(input: &Path, expected: &Path) -> Result<(), CliError> {
    let source: Value = serde_json::from_str(&read_file(input).await?)?;
    let reference: Value = serde_json::from_str(&read_file(expected).await?)?;

    let actual = OrderMapper::invoke(Some(&source))?;
    let diffs = diff_fields(&actual, &reference);

    if diffs.is_empty() {
        info!(
            input = %input.display(),
            expected = %expected.display(),
            "Outputs match"
        );
        return Ok(());
    }

    for diff in &diffs {
        warn!(
            key = %diff.key,
            actual = %describe(diff.actual.as_ref()),
            expected = %describe(diff.expected.as_ref()),
            "Field differs"
        );
    }

    Err(CliError::Mismatch { count: diffs.len() })
}

/// Top-level differences between two JSON values, sorted by key.
///
/// Non-object values are compared as a whole under the key `$`.
#[must_use]
pub fn diff_fields(actual: &Value, expected: &Value) -> Vec<FieldDiff> {
    let (Some(actual_obj), Some(expected_obj)) = (actual.as_object(), expected.as_object())
    else {
        if actual == expected {
            return Vec::new();
        }
        return vec![FieldDiff {
            key: "$".to_string(),
            actual: Some(actual.clone()),
            expected: Some(expected.clone()),
        }];
    };

    union_keys(actual_obj, expected_obj)
        .into_iter()
        .filter_map(|key| {
            let a = actual_obj.get(key);
            let e = expected_obj.get(key);
            (a != e).then(|| FieldDiff {
                key: key.clone(),
                actual: a.cloned(),
                expected: e.cloned(),
            })
        })
        .collect()
}

fn union_keys<'a>(a: &'a Map<String, Value>, b: &'a Map<String, Value>) -> BTreeSet<&'a String> {
    a.keys().chain(b.keys()).collect()
}

fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_string(), Value::to_string)
}
