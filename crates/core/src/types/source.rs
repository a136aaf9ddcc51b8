//! Shopify REST order payload, as received from the storefront.
//!
//! Nested objects are typed records; every leaf is a [`Leaf`] carried through
//! as whatever JSON it holds, so a numeric price or a string ID is never
//! rejected. A JSON `null` and a missing key decode to the same `None`, and
//! unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An optional scalar passed through without coercion.
pub type Leaf = Option<Value>;

// =============================================================================
// Order
// =============================================================================

/// A Shopify order as delivered by the REST Admin API or an order webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceOrder {
    /// Shopify order ID.
    pub id: Leaf,
    /// Sequential order number (e.g. 1001).
    pub order_number: Leaf,
    /// Display name (e.g. "#1001").
    pub name: Leaf,
    /// Customer who placed the order.
    pub customer: Option<SourceCustomer>,
    /// Shipping destination.
    pub shipping_address: Option<SourceAddress>,
    /// Purchased products.
    pub line_items: Option<Vec<SourceLineItem>>,
    /// Subtotal before shipping and tax.
    pub subtotal_price: Leaf,
    /// Shipping total in shop and presentment currencies.
    pub total_shipping_price_set: Option<MoneySet>,
    pub total_tax: Leaf,
    pub total_discounts: Leaf,
    pub total_price: Leaf,
    /// ISO 4217 shop currency code.
    pub currency: Leaf,
    pub financial_status: Leaf,
    pub fulfillment_status: Leaf,
    /// Payment gateways used, in the order they were applied.
    pub payment_gateway_names: Option<Vec<Value>>,
    /// Sales channel (e.g. "web", "pos").
    pub source_name: Leaf,
    pub browser_ip: Leaf,
    /// Comma-separated tag list.
    pub tags: Leaf,
    pub note: Leaf,
    pub note_attributes: Option<Vec<NoteAttribute>>,
    /// ISO 8601 timestamp, passed through verbatim.
    pub processed_at: Leaf,
    pub confirmed: Leaf,
    pub test: Leaf,
}

impl SourceOrder {
    /// The ordering customer, if any.
    #[must_use]
    pub const fn customer(&self) -> Option<&SourceCustomer> {
        self.customer.as_ref()
    }

    /// The shipping address, if any.
    #[must_use]
    pub const fn shipping_address(&self) -> Option<&SourceAddress> {
        self.shipping_address.as_ref()
    }

    /// Line items in source order. Absent and `null` both read as empty.
    #[must_use]
    pub fn line_items(&self) -> &[SourceLineItem] {
        self.line_items.as_deref().unwrap_or_default()
    }

    /// Note attributes in source order. Absent and `null` both read as empty.
    #[must_use]
    pub fn note_attributes(&self) -> &[NoteAttribute] {
        self.note_attributes.as_deref().unwrap_or_default()
    }

    /// Shop-currency amount of `total_shipping_price_set`.
    #[must_use]
    pub fn shipping_amount(&self) -> Option<&Value> {
        self.total_shipping_price_set
            .as_ref()
            .and_then(|set| set.shop_money.as_ref())
            .and_then(|money| money.amount.as_ref())
    }

    /// First payment gateway, if the list is present and non-empty.
    ///
    /// A `null` head reads as absent; later entries are never consulted.
    #[must_use]
    pub fn first_payment_gateway(&self) -> Option<&Value> {
        self.payment_gateway_names
            .as_deref()
            .and_then(<[Value]>::first)
            .filter(|gateway| !gateway.is_null())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer record embedded in an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceCustomer {
    pub id: Leaf,
    pub first_name: Leaf,
    pub last_name: Leaf,
    pub email: Leaf,
    pub phone: Leaf,
    /// Lifetime order count.
    pub orders_count: Leaf,
    /// Lifetime spend as a decimal string.
    pub total_spent: Leaf,
    pub default_address: Option<SourceAddress>,
}

impl SourceCustomer {
    /// The customer's default address, if any.
    #[must_use]
    pub const fn default_address(&self) -> Option<&SourceAddress> {
        self.default_address.as_ref()
    }
}

// =============================================================================
// Address
// =============================================================================

/// Mailing address (customer default or shipping).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAddress {
    /// First line of the address.
    pub address1: Leaf,
    pub city: Leaf,
    /// Province or state code.
    pub province_code: Leaf,
    /// Postal/ZIP code.
    pub zip: Leaf,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: Leaf,
}

// =============================================================================
// Money
// =============================================================================

/// An amount expressed in several currencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneySet {
    /// Amount in the shop's currency.
    pub shop_money: Option<MoneyAmount>,
    /// Amount in the customer's presentment currency.
    pub presentment_money: Option<MoneyAmount>,
}

/// Monetary amount with currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Decimal amount as string (preserves precision).
    pub amount: Leaf,
    pub currency_code: Leaf,
}

// =============================================================================
// Line items and note attributes
// =============================================================================

/// One purchased product entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceLineItem {
    pub id: Leaf,
    pub sku: Leaf,
    pub title: Leaf,
    pub vendor: Leaf,
    pub quantity: Leaf,
    /// Unit price as a decimal string.
    pub price: Leaf,
    /// Weight in grams.
    pub grams: Leaf,
    pub product_id: Leaf,
    pub variant_title: Leaf,
}

/// Free-form name/value annotation attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteAttribute {
    pub name: Leaf,
    pub value: Leaf,
}
