//! Orders

pub mod models;
pub mod requests;
pub mod service;

pub use models::{Order, OrderLine, OrderStatus};
pub use requests::{OrderLineRequest, OrderRequest, OrderUpdateRequest};
pub use service::*;
