//! Order Models

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{catalog::models::ProductSize, products::models::Product, users::models::UserPersonalInformation};

/// Lifecycle state of an order, owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Paid => write!(f, "PAID"),
            Self::Delivered => write!(f, "DELIVERED"),
        }
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub order_line_product_id: i64,
    pub product: Product,
    pub quantity: u32,
    pub product_size: ProductSize,
}

/// A placed order as returned by the order endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub order_line_products: Vec<OrderLine>,
    pub total_price: Decimal,
    pub order_status: OrderStatus,
    pub user_personal_information: UserPersonalInformation,
    pub order_date: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_status_uses_the_backend_wire_names() -> TestResult {
        assert_eq!(serde_json::to_value(OrderStatus::Pending)?, "PENDING");
        assert_eq!(
            serde_json::from_value::<OrderStatus>(serde_json::json!("DELIVERED"))?,
            OrderStatus::Delivered
        );

        Ok(())
    }
}
