//! Review Models

use serde::{Deserialize, Serialize};

/// A product review as returned by the review endpoints. Reviewer names are
/// denormalized so listings render without extra user lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i64,
    pub product_id: i64,
    pub comment: Option<String>,
    pub rating: u8,
    pub first_name: String,
    pub last_name: String,
    pub review_date: String,
}
