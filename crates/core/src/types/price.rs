//! Decimal pricing for catalog items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing attached to a product or an upsell bundle.
///
/// `sale_price` is zero when the item is not on sale; `discount_percentage`
/// is carried as published by the catalog, never recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    pub base_price: Decimal,
    pub sale_price: Decimal,
    pub discount_percentage: Decimal,
}

impl Pricing {
    /// Whether a sale price is active.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.sale_price > Decimal::ZERO && self.sale_price < self.base_price
    }

    /// The price the customer pays.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        if self.is_on_sale() {
            self.sale_price
        } else {
            self.base_price
        }
    }
}

/// Format a decimal amount as a dollar price string (e.g. `$49.99`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_prefers_sale() {
        let pricing = Pricing {
            base_price: Decimal::new(5999, 2),
            sale_price: Decimal::new(3999, 2),
            discount_percentage: Decimal::new(33, 0),
        };
        assert!(pricing.is_on_sale());
        assert_eq!(pricing.effective_price(), Decimal::new(3999, 2));
    }

    #[test]
    fn test_zero_sale_price_means_no_sale() {
        let pricing = Pricing {
            base_price: Decimal::new(2500, 2),
            ..Pricing::default()
        };
        assert!(!pricing.is_on_sale());
        assert_eq!(pricing.effective_price(), Decimal::new(2500, 2));
    }

    #[test]
    fn test_pricing_accepts_numbers_and_strings() {
        let pricing: Pricing =
            serde_json::from_str(r#"{"basePrice": "49.99", "salePrice": 0, "discountPercentage": 0}"#)
                .unwrap();
        assert_eq!(pricing.base_price, Decimal::new(4999, 2));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(4999, 2)), "$49.99");
        assert_eq!(format_price(Decimal::new(25, 0)), "$25.00");
    }
}
