//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line entry in the cart, keyed by `(product_id, product_size_id)`.
///
/// The display fields are snapshots taken when the entry is added; the
/// backend remains the source of truth for live product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub product_size_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub product_size_name: String,
    pub product_gender_name: String,
    pub product_category_name: String,
    pub product_brand_name: String,
    pub image: String,
}

impl CartItem {
    /// Line total for this entry (`quantity * price`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whether this entry is the `(product_id, product_size_id)` pair.
    #[must_use]
    pub fn matches(&self, product_id: i64, product_size_id: i64) -> bool {
        self.product_id == product_id && self.product_size_id == product_size_id
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn item(quantity: u32, price: Decimal) -> CartItem {
        CartItem {
            product_id: 1,
            product_size_id: 2,
            name: "Runner".to_string(),
            price,
            quantity,
            product_size_name: "42".to_string(),
            product_gender_name: "Unisex".to_string(),
            product_category_name: "Shoes".to_string(),
            product_brand_name: "Allora".to_string(),
            image: "runner.webp".to_string(),
        }
    }

    #[test]
    fn line_total_multiplies_quantity_by_price() {
        assert_eq!(item(3, dec!(19.99)).line_total(), dec!(59.97));
    }

    #[test]
    fn matches_requires_both_ids() {
        let entry = item(1, dec!(10));

        assert!(entry.matches(1, 2));
        assert!(!entry.matches(1, 3));
        assert!(!entry.matches(2, 2));
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let value = serde_json::to_value(item(1, dec!(20.00))).unwrap();

        assert!(value.get("productId").is_some());
        assert!(value.get("productSizeId").is_some());
        assert!(value.get("productBrandName").is_some());
        assert!(value.get("product_id").is_none());
    }
}
