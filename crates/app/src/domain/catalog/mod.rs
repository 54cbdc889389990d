//! Catalog
//!
//! The lookup resources products are described with: brands, categories,
//! genders and sizes.

pub mod models;
pub mod service;

pub use models::{ProductBrand, ProductCategory, ProductGender, ProductSize};
pub use service::*;
