//! Catalog Models

use serde::{Deserialize, Serialize};

/// Product brand lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBrand {
    pub product_brand_id: i64,
    pub name: String,
}

/// Product category lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub product_category_id: i64,
    pub name: String,
}

/// Product gender lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGender {
    pub product_gender_id: i64,
    pub name: String,
}

/// Product size lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSize {
    pub product_size_id: i64,
    pub name: String,
}
