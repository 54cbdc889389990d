//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::{HttpResponse, PageResponse};

use crate::{
    client::{ApiClient, ApiError},
    domain::catalog::models::{ProductBrand, ProductCategory, ProductGender, ProductSize},
};

/// Page size used by the filter sidebar's brand/category lists.
const FACET_PAGE_SIZE: u32 = 5;

/// Catalog service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: Arc<ApiClient>,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn brands(&self, page: u32) -> Result<HttpResponse<PageResponse<ProductBrand>>, ApiError> {
        self.client
            .get(&format!("/product-brands?page={page}&size={FACET_PAGE_SIZE}"))
            .await
    }

    async fn categories(
        &self,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<ProductCategory>>, ApiError> {
        self.client
            .get(&format!("/product-categories?page={page}&size={FACET_PAGE_SIZE}"))
            .await
    }

    async fn genders(&self) -> Result<HttpResponse<Vec<ProductGender>>, ApiError> {
        self.client.get("/product-genders").await
    }

    async fn sizes(&self) -> Result<HttpResponse<Vec<ProductSize>>, ApiError> {
        self.client.get("/product-sizes").await
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Page of product brands.
    async fn brands(&self, page: u32) -> Result<HttpResponse<PageResponse<ProductBrand>>, ApiError>;

    /// Page of product categories.
    async fn categories(
        &self,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<ProductCategory>>, ApiError>;

    /// Every product gender; the list is short enough to be unpaged.
    async fn genders(&self) -> Result<HttpResponse<Vec<ProductGender>>, ApiError>;

    /// Every product size; the list is short enough to be unpaged.
    async fn sizes(&self) -> Result<HttpResponse<Vec<ProductSize>>, ApiError>;
}
