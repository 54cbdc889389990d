//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::domain::catalog::models::{ProductBrand, ProductCategory, ProductGender, ProductSize};

/// Product as listed by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub sizes: SmallVec<[ProductSize; 4]>,
    pub brand: ProductBrand,
    pub gender: ProductGender,
    pub category: ProductCategory,
    pub images: SmallVec<[Image; 4]>,
}

impl Product {
    /// Whether any stock remains for this product (across all sizes).
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// URL of the first product image, when one exists.
    #[must_use]
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// Stored product image metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_id: i64,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
}
