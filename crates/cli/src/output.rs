//! Table rendering for listings.

use allora::{cart::CartItem, envelope::PageResponse};
use allora_app::domain::{orders::Order, products::Product, reviews::Review, users::User};
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Sizes")]
    sizes: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

#[derive(Debug, Tabled)]
struct CartRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Line total")]
    line_total: String,
}

#[derive(Debug, Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Debug, Tabled)]
struct ReviewRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Product")]
    product_id: i64,
    #[tabled(rename = "Rating")]
    rating: u8,
    #[tabled(rename = "By")]
    author: String,
    #[tabled(rename = "Comment")]
    comment: String,
}

#[derive(Debug, Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Admin")]
    is_administrator: bool,
}

fn styled<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());

    table.to_string()
}

/// Render a product listing.
#[must_use]
pub fn products_table(products: &[Product]) -> String {
    styled(products.iter().map(|product| ProductRow {
        id: product.product_id,
        name: product.name.clone(),
        brand: product.brand.name.clone(),
        category: product.category.name.clone(),
        sizes: product
            .sizes
            .iter()
            .map(|size| size.name.clone())
            .collect::<Vec<_>>()
            .join(", "),
        price: product.price.to_string(),
        stock: product.stock,
    }))
}

/// Render the local cart contents.
#[must_use]
pub fn cart_table(items: &[CartItem]) -> String {
    styled(items.iter().map(|item| CartRow {
        product: item.name.clone(),
        size: item.product_size_name.clone(),
        quantity: item.quantity,
        price: item.price.to_string(),
        line_total: item.line_total().to_string(),
    }))
}

/// Render an order listing.
#[must_use]
pub fn orders_table(orders: &[Order]) -> String {
    styled(orders.iter().map(|order| OrderRow {
        id: order.order_id,
        date: order.order_date.clone(),
        status: order.order_status.to_string(),
        lines: order.order_line_products.len(),
        total: order.total_price.to_string(),
    }))
}

/// Render a review listing.
#[must_use]
pub fn reviews_table(reviews: &[Review]) -> String {
    styled(reviews.iter().map(|review| ReviewRow {
        id: review.review_id,
        product_id: review.product_id,
        rating: review.rating,
        author: format!("{} {}", review.first_name, review.last_name),
        comment: review.comment.clone().unwrap_or_default(),
    }))
}

/// Render a user listing.
#[must_use]
pub fn users_table(users: &[User]) -> String {
    styled(users.iter().map(|user| UserRow {
        id: user.user_id,
        username: user.username.clone(),
        email: user.email.clone(),
        name: user.user_personal_information.full_name(),
        is_administrator: user.is_administrator,
    }))
}

/// One-line paging footer for a listing.
#[must_use]
pub fn page_footer<T>(page: &PageResponse<T>) -> String {
    format!(
        "page {} of {} ({} total)",
        page.number.saturating_add(1),
        page.total_pages,
        page.total_elements
    )
}
