//! Reviews

pub mod models;
pub mod requests;
pub mod service;

pub use models::Review;
pub use requests::ReviewRequest;
pub use service::*;
