//! Test helpers.

use std::sync::Arc;

use allora::envelope::{HttpResponse, PageResponse};
use allora_app::{
    AppContext,
    auth::MockAuthService,
    domain::{
        ai::MockAiService,
        catalog::{MockCatalogService, ProductBrand, ProductCategory, ProductGender, ProductSize},
        chat::MockChatService,
        orders::{MockOrdersService, Order, OrderStatus},
        products::{MockProductsService, Product},
        reviews::MockReviewsService,
        users::{MockUsersService, UserPersonalInformation},
    },
};
use rust_decimal::Decimal;

/// A context where every service is an expectation-free mock; any call on an
/// unreplaced service fails the test. Replace the fields a test drives.
pub(crate) fn empty_context() -> AppContext {
    AppContext {
        auth: Arc::new(MockAuthService::new()),
        products: Arc::new(MockProductsService::new()),
        catalog: Arc::new(MockCatalogService::new()),
        orders: Arc::new(MockOrdersService::new()),
        users: Arc::new(MockUsersService::new()),
        reviews: Arc::new(MockReviewsService::new()),
        ai: Arc::new(MockAiService::new()),
        chat: Arc::new(MockChatService::new()),
    }
}

/// Wrap a body in a minimal success envelope.
pub(crate) fn envelope<T>(body: T) -> HttpResponse<T> {
    HttpResponse {
        timestamp: None,
        response_status_code: Some(200),
        response_status: Some("OK".to_string()),
        response_message: None,
        response_developer_message: None,
        body: Some(body),
    }
}

/// Wrap items in a single-page descriptor.
pub(crate) fn single_page<T>(content: Vec<T>) -> PageResponse<T> {
    let count = u32::try_from(content.len()).unwrap_or(u32::MAX);

    PageResponse {
        total_elements: u64::from(count),
        total_pages: 1,
        number: 0,
        size: count.max(1),
        number_of_elements: count,
        first: true,
        last: true,
        empty: content.is_empty(),
        content,
        pageable: allora::envelope::Pageable::default(),
        sort: allora::envelope::SortFlags::default(),
    }
}

/// A product fixture with one size, in stock.
pub(crate) fn product(product_id: i64, size_id: i64, price: Decimal, stock: u32) -> Product {
    Product {
        product_id,
        name: format!("Product {product_id}"),
        description: "Fixture product".to_string(),
        price,
        stock,
        sizes: [ProductSize {
            product_size_id: size_id,
            name: format!("Size {size_id}"),
        }]
        .into_iter()
        .collect(),
        brand: ProductBrand {
            product_brand_id: 1,
            name: "Allora".to_string(),
        },
        gender: ProductGender {
            product_gender_id: 1,
            name: "Unisex".to_string(),
        },
        category: ProductCategory {
            product_category_id: 1,
            name: "Shoes".to_string(),
        },
        images: [].into_iter().collect(),
    }
}

/// An order fixture with no lines.
pub(crate) fn order(order_id: i64, status: OrderStatus, total: Decimal) -> Order {
    Order {
        order_id,
        order_line_products: Vec::new(),
        total_price: total,
        order_status: status,
        user_personal_information: UserPersonalInformation {
            user_personal_information_id: 1,
            first_name: "Demo".to_string(),
            last_name: "Visitor".to_string(),
            address: "1 Example Street".to_string(),
        },
        order_date: "2025-11-02T10:15:30Z".to_string(),
    }
}
