//! Normalized internal order record.
//!
//! Serialized with camelCase keys. Every field is always emitted: absent
//! source data serializes as `null`, sequences as `[]`. Copied leaves keep
//! the JSON type they had in the source.

use serde::{Deserialize, Serialize};

use super::source::Leaf;

/// Value of `shippingStatus` until shipping rules exist.
pub const PENDING_SHIPPING_STATUS: &str = "PENDING";

/// Value of `shippingSpeed` until shipping rules exist.
pub const STANDARD_SHIPPING_SPEED: &str = "STANDARD";

/// Flat internal order record consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrder {
    // Order identity
    pub order_id: Leaf,
    pub order_number: Leaf,
    pub order_name: Leaf,

    // Customer identity, contact and lifetime metrics
    pub customer_id: Leaf,
    pub customer_first_name: Leaf,
    pub customer_last_name: Leaf,
    pub customer_email: Leaf,
    pub customer_phone: Leaf,
    pub customer_orders: Leaf,
    pub customer_lifetime_value: Leaf,

    // Customer default address
    pub customer_street: Leaf,
    pub customer_city: Leaf,
    pub customer_state: Leaf,
    pub customer_zip: Leaf,
    pub customer_country: Leaf,

    // Shipping address
    pub shipping_street: Leaf,
    pub shipping_city: Leaf,
    pub shipping_state: Leaf,
    pub shipping_zip: Leaf,
    pub shipping_country: Leaf,

    pub items: Vec<InternalLineItem>,

    // Financial totals
    pub subtotal: Leaf,
    pub shipping_cost: Leaf,
    pub tax: Leaf,
    pub discounts: Leaf,
    pub total: Leaf,
    pub currency: Leaf,

    // Status
    pub payment_status: Leaf,
    pub fulfillment_status: Leaf,
    pub payment_method: Leaf,

    // Source metadata
    pub source: Leaf,
    pub browser_ip: Leaf,
    pub tags_raw: Leaf,
    pub notes: Leaf,

    pub note_attributes: Vec<InternalNoteAttribute>,

    pub processed_at: Leaf,
    pub is_confirmed: Leaf,
    pub is_test: Leaf,

    #[serde(flatten)]
    pub placeholders: PlaceholderAggregates,
}

/// Line item in internal naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalLineItem {
    pub item_id: Leaf,
    pub sku: Leaf,
    pub name: Leaf,
    pub vendor: Leaf,
    pub quantity: Leaf,
    pub unit_price: Leaf,
    /// Weight in grams.
    pub weight: Leaf,
    pub product_id: Leaf,
    pub variant_title: Leaf,
}

/// Note attribute; names are unchanged from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalNoteAttribute {
    pub name: Leaf,
    pub value: Leaf,
}

/// Reserved aggregate slots.
///
/// These are a stub of future business rules and hold fixed values for every
/// order. They are not derived from line items, even though `items` carries
/// enough data to compute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderAggregates {
    pub item_count: u64,
    pub total_quantity: u64,
    pub total_weight: u64,
    pub total_weight_kg: u64,
    pub premium_item_count: u64,
    pub vendor_count: u64,
    pub final_total: u64,
    pub shipping_status: String,
    pub shipping_speed: String,
    pub is_paid: bool,
    pub is_fulfilled: bool,
}

impl PlaceholderAggregates {
    /// The fixed placeholder block emitted for every order.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            item_count: 0,
            total_quantity: 0,
            total_weight: 0,
            total_weight_kg: 0,
            premium_item_count: 0,
            vendor_count: 0,
            final_total: 0,
            shipping_status: PENDING_SHIPPING_STATUS.to_owned(),
            shipping_speed: STANDARD_SHIPPING_SPEED.to_owned(),
            is_paid: false,
            is_fulfilled: false,
        }
    }
}
