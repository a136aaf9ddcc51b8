//! Order Mapper Core - Shopify order to internal order mapping.
//!
//! This crate converts a Shopify REST order payload into the flat internal
//! order record used downstream. It is consumed by:
//! - `cli` - File loading, timing harness and output comparison
//! - `integration-tests` - Fixture-driven end-to-end checks
//!
//! # Architecture
//!
//! The core crate contains only types and the mapping itself - no file access,
//! no clocks, no global state. Mapping is a pure function, safe to call from
//! any number of threads.
//!
//! # Modules
//!
//! - [`types`] - Source and internal order records
//! - [`mapper`] - [`OrderMapper`] and its entry points
//! - [`error`] - [`MapError`]
//!
//! # Example
//!
//! ```rust
//! use order_mapper_core::OrderMapper;
//!
//! let order = OrderMapper::map_str(r#"{"id": 1001, "payment_gateway_names": ["manual"]}"#)?;
//! assert_eq!(order.payment_method, Some(serde_json::json!("manual")));
//! assert!(order.items.is_empty());
//! # Ok::<(), order_mapper_core::MapError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod mapper;
pub mod types;

pub use error::MapError;
pub use mapper::OrderMapper;
pub use types::*;
