//! Order types on both sides of the mapping.
//!
//! - [`source`] - Shopify REST order payload (input)
//! - [`internal`] - Normalized internal order record (output)

pub mod internal;
pub mod source;

pub use internal::{
    InternalLineItem, InternalNoteAttribute, InternalOrder, PENDING_SHIPPING_STATUS,
    PlaceholderAggregates, STANDARD_SHIPPING_SPEED,
};
pub use source::{
    Leaf, MoneyAmount, MoneySet, NoteAttribute, SourceAddress, SourceCustomer, SourceLineItem,
    SourceOrder,
};
