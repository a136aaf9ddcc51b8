//! Shopify order to internal order mapping.

use serde::Deserialize;
use serde_json::Value;

use crate::error::MapError;
use crate::types::{
    InternalLineItem, InternalNoteAttribute, InternalOrder, NoteAttribute, PlaceholderAggregates,
    SourceCustomer, SourceLineItem, SourceOrder,
};

/// Stateless Shopify order mapper.
///
/// All entry points are pure: the same input always yields the same output,
/// and nothing is shared between calls, so the mapper can be used from any
/// number of threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderMapper;

impl OrderMapper {
    /// Map a decoded Shopify order into the internal order record.
    #[must_use]
    pub fn map(order: &SourceOrder) -> InternalOrder {
        let customer = order.customer();
        let customer_address = customer.and_then(SourceCustomer::default_address);
        let shipping_address = order.shipping_address();

        let items: Vec<_> = order.line_items().iter().map(map_line_item).collect();
        let note_attributes: Vec<_> = order
            .note_attributes()
            .iter()
            .map(map_note_attribute)
            .collect();

        tracing::trace!(
            order_id = ?order.id,
            items = items.len(),
            note_attributes = note_attributes.len(),
            "Mapped order"
        );

        InternalOrder {
            order_id: order.id.clone(),
            order_number: order.order_number.clone(),
            order_name: order.name.clone(),

            customer_id: pluck(customer, |c| &c.id),
            customer_first_name: pluck(customer, |c| &c.first_name),
            customer_last_name: pluck(customer, |c| &c.last_name),
            customer_email: pluck(customer, |c| &c.email),
            customer_phone: pluck(customer, |c| &c.phone),
            customer_orders: pluck(customer, |c| &c.orders_count),
            customer_lifetime_value: pluck(customer, |c| &c.total_spent),

            customer_street: pluck(customer_address, |a| &a.address1),
            customer_city: pluck(customer_address, |a| &a.city),
            customer_state: pluck(customer_address, |a| &a.province_code),
            customer_zip: pluck(customer_address, |a| &a.zip),
            customer_country: pluck(customer_address, |a| &a.country_code),

            shipping_street: pluck(shipping_address, |a| &a.address1),
            shipping_city: pluck(shipping_address, |a| &a.city),
            shipping_state: pluck(shipping_address, |a| &a.province_code),
            shipping_zip: pluck(shipping_address, |a| &a.zip),
            shipping_country: pluck(shipping_address, |a| &a.country_code),

            items,

            subtotal: order.subtotal_price.clone(),
            shipping_cost: order.shipping_amount().cloned(),
            tax: order.total_tax.clone(),
            discounts: order.total_discounts.clone(),
            total: order.total_price.clone(),
            currency: order.currency.clone(),

            payment_status: order.financial_status.clone(),
            fulfillment_status: order.fulfillment_status.clone(),
            payment_method: order.first_payment_gateway().cloned(),

            source: order.source_name.clone(),
            browser_ip: order.browser_ip.clone(),
            tags_raw: order.tags.clone(),
            notes: order.note.clone(),

            note_attributes,

            processed_at: order.processed_at.clone(),
            is_confirmed: order.confirmed.clone(),
            is_test: order.test.clone(),

            placeholders: PlaceholderAggregates::stub(),
        }
    }

    /// Decode a Shopify order from JSON text and map it.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Decode`] if the text is not valid JSON, or if the
    /// order or one of its nested objects is not a JSON object.
    pub fn map_str(json: &str) -> Result<InternalOrder, MapError> {
        let order: SourceOrder = serde_json::from_str(json)?;
        Ok(Self::map(&order))
    }

    /// Host-facing entry point operating on untyped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingInput`] if no input (or a JSON `null`) is
    /// supplied, and [`MapError::Decode`] if the order or one of its nested
    /// objects is not a JSON object.
    pub fn invoke(input: Option<&Value>) -> Result<Value, MapError> {
        let value = match input {
            None => return Err(missing_input("no value")),
            Some(Value::Null) => return Err(missing_input("null")),
            Some(value) => value,
        };

        let order = SourceOrder::deserialize(value)?;
        Ok(serde_json::to_value(Self::map(&order))?)
    }
}

impl From<&SourceOrder> for InternalOrder {
    fn from(order: &SourceOrder) -> Self {
        OrderMapper::map(order)
    }
}

fn missing_input(received: &str) -> MapError {
    tracing::debug!(received, "Mapper invoked without input");
    MapError::MissingInput {
        received: received.to_owned(),
    }
}

/// Read an optional leaf through an optional parent.
fn pluck<P, T: Clone>(parent: Option<&P>, field: impl FnOnce(&P) -> &Option<T>) -> Option<T> {
    parent.and_then(|p| field(p).clone())
}

fn map_line_item(item: &SourceLineItem) -> InternalLineItem {
    InternalLineItem {
        item_id: item.id.clone(),
        sku: item.sku.clone(),
        name: item.title.clone(),
        vendor: item.vendor.clone(),
        quantity: item.quantity.clone(),
        unit_price: item.price.clone(),
        weight: item.grams.clone(),
        product_id: item.product_id.clone(),
        variant_title: item.variant_title.clone(),
    }
}

fn map_note_attribute(attr: &NoteAttribute) -> InternalNoteAttribute {
    InternalNoteAttribute {
        name: attr.name.clone(),
        value: attr.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const CUSTOMER_FIELDS: [&str; 12] = [
        "customerId",
        "customerFirstName",
        "customerLastName",
        "customerEmail",
        "customerPhone",
        "customerOrders",
        "customerLifetimeValue",
        "customerStreet",
        "customerCity",
        "customerState",
        "customerZip",
        "customerCountry",
    ];

    const ALL_FIELDS: [&str; 49] = [
        "orderId",
        "orderNumber",
        "orderName",
        "customerId",
        "customerFirstName",
        "customerLastName",
        "customerEmail",
        "customerPhone",
        "customerOrders",
        "customerLifetimeValue",
        "customerStreet",
        "customerCity",
        "customerState",
        "customerZip",
        "customerCountry",
        "shippingStreet",
        "shippingCity",
        "shippingState",
        "shippingZip",
        "shippingCountry",
        "items",
        "subtotal",
        "shippingCost",
        "tax",
        "discounts",
        "total",
        "currency",
        "paymentStatus",
        "fulfillmentStatus",
        "paymentMethod",
        "source",
        "browserIp",
        "tagsRaw",
        "notes",
        "noteAttributes",
        "processedAt",
        "isConfirmed",
        "isTest",
        "itemCount",
        "totalQuantity",
        "totalWeight",
        "totalWeightKg",
        "premiumItemCount",
        "vendorCount",
        "finalTotal",
        "shippingStatus",
        "shippingSpeed",
        "isPaid",
        "isFulfilled",
    ];

    fn invoke(input: &Value) -> Value {
        OrderMapper::invoke(Some(input)).unwrap()
    }

    #[test]
    fn test_empty_order_emits_every_key() {
        let out = invoke(&json!({}));
        let obj = out.as_object().unwrap();
        for key in ALL_FIELDS {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), ALL_FIELDS.len());
        assert_eq!(out["items"], json!([]));
        assert_eq!(out["noteAttributes"], json!([]));
        assert_eq!(out["orderId"], Value::Null);
        assert_eq!(out["shippingCost"], Value::Null);
    }

    #[test]
    fn test_absent_customer_nulls_customer_fields() {
        let out = invoke(&json!({ "id": 1, "name": "#1001" }));
        for key in CUSTOMER_FIELDS {
            assert_eq!(out[key], Value::Null, "{key} should be null");
        }
        assert_eq!(out["orderName"], "#1001");
    }

    #[test]
    fn test_customer_without_default_address() {
        let out = invoke(&json!({
            "customer": {
                "id": 207,
                "first_name": "Bob",
                "last_name": "Norman",
                "email": "bob.norman@mail.example.com",
                "phone": "+16136120707",
                "orders_count": 3,
                "total_spent": "199.65"
            }
        }));
        assert_eq!(out["customerId"], 207);
        assert_eq!(out["customerFirstName"], "Bob");
        assert_eq!(out["customerOrders"], 3);
        assert_eq!(out["customerLifetimeValue"], "199.65");
        assert_eq!(out["customerStreet"], Value::Null);
        assert_eq!(out["customerCity"], Value::Null);
        assert_eq!(out["customerCountry"], Value::Null);
    }

    #[test]
    fn test_null_default_address_nulls_customer_address() {
        let out = invoke(&json!({
            "customer": { "id": 1, "first_name": "Bob", "default_address": null }
        }));
        assert_eq!(out["customerId"], 1);
        assert_eq!(out["customerFirstName"], "Bob");
        for key in [
            "customerStreet",
            "customerCity",
            "customerState",
            "customerZip",
            "customerCountry",
        ] {
            assert_eq!(out[key], Value::Null, "{key} should be null");
        }
    }

    #[test]
    fn test_partial_default_address() {
        let out = invoke(&json!({
            "customer": { "default_address": { "address1": "Chestnut Street 92", "zip": "40202" } }
        }));
        assert_eq!(out["customerStreet"], "Chestnut Street 92");
        assert_eq!(out["customerZip"], "40202");
        assert_eq!(out["customerCity"], Value::Null);
        assert_eq!(out["customerState"], Value::Null);
    }

    #[test]
    fn test_shipping_address_mapping() {
        let out = invoke(&json!({
            "shipping_address": {
                "address1": "123 Amoebobacterieae St",
                "city": "Ottawa",
                "province_code": "ON",
                "zip": "K2P0V6",
                "country_code": "CA"
            }
        }));
        assert_eq!(out["shippingStreet"], "123 Amoebobacterieae St");
        assert_eq!(out["shippingCity"], "Ottawa");
        assert_eq!(out["shippingState"], "ON");
        assert_eq!(out["shippingZip"], "K2P0V6");
        assert_eq!(out["shippingCountry"], "CA");
    }

    #[test]
    fn test_payment_method_first_of() {
        let out = invoke(&json!({ "payment_gateway_names": ["manual", "paypal"] }));
        assert_eq!(out["paymentMethod"], "manual");

        let out = invoke(&json!({ "payment_gateway_names": [] }));
        assert_eq!(out["paymentMethod"], Value::Null);

        let out = invoke(&json!({}));
        assert_eq!(out["paymentMethod"], Value::Null);
    }

    #[test]
    fn test_payment_method_null_head_is_null() {
        let out = invoke(&json!({ "payment_gateway_names": [null, "paypal"] }));
        assert_eq!(out["paymentMethod"], Value::Null);
    }

    #[test]
    fn test_leaves_pass_through_whatever_json_type() {
        let out = invoke(&json!({
            "id": "gid://shopify/Order/450789469",
            "total_price": 598.94,
            "confirmed": "yes",
            "customer": { "id": "207", "orders_count": "3", "total_spent": 199.65 },
            "total_shipping_price_set": { "shop_money": { "amount": 10 } },
            "line_items": [{ "price": 9.99, "quantity": "2", "grams": 100.5 }],
            "note_attributes": [{ "name": "count", "value": 3 }]
        }));
        assert_eq!(out["orderId"], "gid://shopify/Order/450789469");
        assert_eq!(out["total"], 598.94);
        assert_eq!(out["isConfirmed"], "yes");
        assert_eq!(out["customerId"], "207");
        assert_eq!(out["customerOrders"], "3");
        assert_eq!(out["customerLifetimeValue"], 199.65);
        assert_eq!(out["shippingCost"], 10);
        assert_eq!(out["items"][0]["unitPrice"], 9.99);
        assert_eq!(out["items"][0]["quantity"], "2");
        assert_eq!(out["items"][0]["weight"], 100.5);
        assert_eq!(out["noteAttributes"][0]["value"], 3);
    }

    #[test]
    fn test_line_item_mapping() {
        let out = invoke(&json!({
            "line_items": [{
                "id": 1,
                "sku": "A1",
                "title": "Widget",
                "vendor": "Acme",
                "quantity": 2,
                "price": "9.99",
                "grams": 100,
                "product_id": 55,
                "variant_title": "Red"
            }]
        }));
        assert_eq!(
            out["items"],
            json!([{
                "itemId": 1,
                "sku": "A1",
                "name": "Widget",
                "vendor": "Acme",
                "quantity": 2,
                "unitPrice": "9.99",
                "weight": 100,
                "productId": 55,
                "variantTitle": "Red"
            }])
        );
    }

    #[test]
    fn test_line_items_keep_order_and_nulls() {
        let out = invoke(&json!({
            "line_items": [
                { "title": "First" },
                { "title": "Second", "sku": null }
            ]
        }));
        assert_eq!(out["items"][0]["name"], "First");
        assert_eq!(out["items"][1]["name"], "Second");
        assert_eq!(out["items"][1]["sku"], Value::Null);
        assert_eq!(out["items"][0]["itemId"], Value::Null);
    }

    #[test]
    fn test_note_attributes() {
        let out = invoke(&json!({ "note_attributes": [] }));
        assert_eq!(out["noteAttributes"], json!([]));

        let out = invoke(&json!({
            "note_attributes": [
                { "name": "gift_wrap", "value": "yes" },
                { "name": "colour" }
            ]
        }));
        assert_eq!(
            out["noteAttributes"],
            json!([
                { "name": "gift_wrap", "value": "yes" },
                { "name": "colour", "value": null }
            ])
        );
    }

    #[test]
    fn test_placeholders_ignore_line_items() {
        let out = invoke(&json!({
            "financial_status": "paid",
            "fulfillment_status": "fulfilled",
            "total_price": "409.94",
            "line_items": [
                { "vendor": "Acme", "quantity": 3, "grams": 500 },
                { "vendor": "Globex", "quantity": 1, "grams": 1500 }
            ]
        }));
        assert_eq!(out["itemCount"], 0);
        assert_eq!(out["totalQuantity"], 0);
        assert_eq!(out["totalWeight"], 0);
        assert_eq!(out["totalWeightKg"], 0);
        assert_eq!(out["premiumItemCount"], 0);
        assert_eq!(out["vendorCount"], 0);
        assert_eq!(out["finalTotal"], 0);
        assert_eq!(out["shippingStatus"], "PENDING");
        assert_eq!(out["shippingSpeed"], "STANDARD");
        assert_eq!(out["isPaid"], false);
        assert_eq!(out["isFulfilled"], false);
    }

    #[test]
    fn test_financial_and_metadata_fields() {
        let out = invoke(&json!({
            "subtotal_price": "597.00",
            "total_shipping_price_set": {
                "shop_money": { "amount": "10.00", "currency_code": "USD" },
                "presentment_money": { "amount": "13.50", "currency_code": "CAD" }
            },
            "total_tax": "11.94",
            "total_discounts": "10.00",
            "total_price": "598.94",
            "currency": "USD",
            "source_name": "web",
            "browser_ip": "0.0.0.0",
            "tags": "imported, vip",
            "note": "Leave at door",
            "processed_at": "2008-01-10T11:00:00-05:00",
            "confirmed": true,
            "test": false
        }));
        assert_eq!(out["subtotal"], "597.00");
        assert_eq!(out["shippingCost"], "10.00");
        assert_eq!(out["tax"], "11.94");
        assert_eq!(out["discounts"], "10.00");
        assert_eq!(out["total"], "598.94");
        assert_eq!(out["currency"], "USD");
        assert_eq!(out["source"], "web");
        assert_eq!(out["browserIp"], "0.0.0.0");
        assert_eq!(out["tagsRaw"], "imported, vip");
        assert_eq!(out["notes"], "Leave at door");
        assert_eq!(out["processedAt"], "2008-01-10T11:00:00-05:00");
        assert_eq!(out["isConfirmed"], true);
        assert_eq!(out["isTest"], false);
    }

    #[test]
    fn test_map_is_deterministic() {
        let input = r#"{"id":9,"customer":{"id":1},"line_items":[{"id":2,"title":"T"}]}"#;
        let first = serde_json::to_string(&OrderMapper::map_str(input).unwrap()).unwrap();
        let second = serde_json::to_string(&OrderMapper::map_str(input).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_key_order_follows_record() {
        let json = serde_json::to_string(&OrderMapper::map(&SourceOrder::default())).unwrap();
        assert!(json.starts_with(r#"{"orderId":null,"orderNumber":null,"orderName":null"#));
        assert!(json.ends_with(r#""isPaid":false,"isFulfilled":false}"#));
    }

    #[test]
    fn test_invoke_without_input() {
        let err = OrderMapper::invoke(None).unwrap_err();
        assert!(matches!(err, MapError::MissingInput { ref received } if received == "no value"));
        assert!(err.to_string().contains("no input provided"));
    }

    #[test]
    fn test_invoke_with_null_input() {
        assert!(matches!(
            OrderMapper::invoke(Some(&Value::Null)),
            Err(MapError::MissingInput { .. })
        ));
    }

    #[test]
    fn test_invoke_with_non_object() {
        assert!(matches!(
            OrderMapper::invoke(Some(&json!([1, 2, 3]))),
            Err(MapError::Decode(_))
        ));
    }

    #[test]
    fn test_map_str_rejects_malformed_json() {
        assert!(matches!(
            OrderMapper::map_str("{\"id\": "),
            Err(MapError::Decode(_))
        ));
    }

    #[test]
    fn test_from_impl_matches_map() {
        let order = SourceOrder {
            name: Some(json!("#1002")),
            ..SourceOrder::default()
        };
        assert_eq!(InternalOrder::from(&order), OrderMapper::map(&order));
    }
}
