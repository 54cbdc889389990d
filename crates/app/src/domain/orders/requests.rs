//! Order Requests

use serde::{Deserialize, Serialize};

use allora::cart::CartItem;

use crate::domain::orders::models::OrderStatus;

/// One line of an order placement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: i64,
    pub quantity: u32,
    pub product_size_id: i64,
}

impl From<&CartItem> for OrderLineRequest {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            product_size_id: item.product_size_id,
        }
    }
}

/// Order placement request: the checkout translation of the local cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_line_products: Vec<OrderLineRequest>,
}

impl OrderRequest {
    /// Translate cart entries into order lines, preserving insertion order.
    /// Display-only cart fields are dropped; the backend reprices every line
    /// from its own catalog.
    #[must_use]
    pub fn from_cart_items(items: &[CartItem]) -> Self {
        Self {
            order_line_products: items.iter().map(OrderLineRequest::from).collect(),
        }
    }
}

/// Administrator order status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    pub order_status: OrderStatus,
}
