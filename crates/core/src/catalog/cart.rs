//! Shopper cart, passed through to rendering untouched.

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, UpsellId};

/// Name of the cookie identifying the shopper's device.
pub const DEVICE_IDENTIFIER_COOKIE: &str = "device_identifier";

/// Cart keyed by device identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    pub id: String,
    pub device_identifier: String,
    pub items: Vec<CartItem>,
}

/// A cart line: either a single product or an upsell bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartItem {
    #[serde(rename = "product", rename_all = "camelCase")]
    Product {
        base_product_id: ProductId,
        #[serde(default)]
        color: String,
        #[serde(default)]
        size: String,
        #[serde(default)]
        index: i64,
    },
    #[serde(rename = "upsell", rename_all = "camelCase")]
    Upsell {
        base_upsell_id: UpsellId,
        #[serde(default)]
        index: i64,
    },
}

impl Cart {
    /// Whether any line in the cart is the given product.
    #[must_use]
    pub fn contains_product(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| {
            matches!(item, CartItem::Product { base_product_id, .. } if base_product_id == id)
        })
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_from_json() {
        let json = r#"{
            "id": "cart_1",
            "deviceIdentifier": "dev_1",
            "items": [
                {"type": "product", "baseProductId": "p1", "color": "Black", "size": "M", "index": 1},
                {"type": "upsell", "baseUpsellId": "u1", "index": 2}
            ]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert!(cart.contains_product(&ProductId::new("p1")));
        assert!(!cart.contains_product(&ProductId::new("u1")));
    }

    #[test]
    fn test_empty_cart_contains_nothing() {
        assert!(!Cart::default().contains_product(&ProductId::new("p1")));
    }
}
