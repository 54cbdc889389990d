//! Reviews service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::{HttpResponse, PageResponse};

use crate::{
    client::{ApiClient, ApiError},
    domain::reviews::{models::Review, requests::ReviewRequest},
};

/// Page size under a product's detail view.
const PRODUCT_REVIEWS_PAGE_SIZE: u32 = 3;

/// Page size of the administrator review listing.
const ALL_REVIEWS_PAGE_SIZE: u32 = 6;

/// Reviews service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpReviewsService {
    client: Arc<ApiClient>,
}

impl HttpReviewsService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewsService for HttpReviewsService {
    async fn for_product(
        &self,
        product_id: i64,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<Review>>, ApiError> {
        self.client
            .get(&format!(
                "/reviews/product-id={product_id}?page={page}&size={PRODUCT_REVIEWS_PAGE_SIZE}"
            ))
            .await
    }

    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Review>>, ApiError> {
        self.client
            .get(&format!("/reviews?page={page}&size={ALL_REVIEWS_PAGE_SIZE}"))
            .await
    }

    async fn create(&self, request: ReviewRequest) -> Result<HttpResponse<Review>, ApiError> {
        self.client.post("/reviews", &request).await
    }

    async fn delete(&self, review_id: i64) -> Result<HttpResponse<()>, ApiError> {
        self.client.delete(&format!("/reviews/id={review_id}")).await
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Page of a product's reviews.
    async fn for_product(
        &self,
        product_id: i64,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<Review>>, ApiError>;

    /// Page of every review (administrator listing).
    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Review>>, ApiError>;

    /// Submit a review as the signed-in user.
    async fn create(&self, request: ReviewRequest) -> Result<HttpResponse<Review>, ApiError>;

    /// Delete a review (administrator operation).
    async fn delete(&self, review_id: i64) -> Result<HttpResponse<()>, ApiError>;
}
