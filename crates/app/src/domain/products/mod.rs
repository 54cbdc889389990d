//! Products

pub mod models;
pub mod requests;
pub mod service;

pub use models::{Image, Product};
pub use requests::{ImageUpload, ProductFilterRequest, ProductUpload};
pub use service::*;
