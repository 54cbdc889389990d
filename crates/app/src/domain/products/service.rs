//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::{HttpResponse, PageResponse};

use crate::{
    client::{ApiClient, ApiError},
    domain::products::{models::Product, requests::{ProductFilterRequest, ProductUpload}},
};

/// Page size of the storefront product grid.
const GRID_PAGE_SIZE: u32 = 9;

/// Products service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: Arc<ApiClient>,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn in_stock(
        &self,
        page: u32,
        size: u32,
    ) -> Result<HttpResponse<PageResponse<Product>>, ApiError> {
        self.client
            .get(&format!("/products/in-stock?page={page}&size={size}"))
            .await
    }

    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Product>>, ApiError> {
        self.client
            .get(&format!("/products?page={page}&size={GRID_PAGE_SIZE}"))
            .await
    }

    async fn filtered(
        &self,
        filter: ProductFilterRequest,
    ) -> Result<HttpResponse<PageResponse<Product>>, ApiError> {
        self.client
            .post(
                &format!("/products/all/filters?page={}&size={GRID_PAGE_SIZE}", filter.page),
                &filter,
            )
            .await
    }

    async fn create(&self, upload: ProductUpload) -> Result<HttpResponse<Product>, ApiError> {
        let form = upload.into_form()?;

        self.client.post_multipart("/products", form).await
    }

    async fn update(
        &self,
        product_id: i64,
        upload: ProductUpload,
    ) -> Result<HttpResponse<Product>, ApiError> {
        let form = upload.into_form()?;

        self.client
            .patch_multipart(&format!("/products/id={product_id}"), form)
            .await
    }

    async fn delete(&self, product_id: i64) -> Result<HttpResponse<()>, ApiError> {
        self.client.delete(&format!("/products/id={product_id}")).await
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Page of products with remaining stock (the storefront listing).
    async fn in_stock(
        &self,
        page: u32,
        size: u32,
    ) -> Result<HttpResponse<PageResponse<Product>>, ApiError>;

    /// Page of every product, stocked or not (the administrator listing).
    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Product>>, ApiError>;

    /// Page of products matching the given facet filter.
    async fn filtered(
        &self,
        filter: ProductFilterRequest,
    ) -> Result<HttpResponse<PageResponse<Product>>, ApiError>;

    /// Create a product from an administrator upload.
    async fn create(&self, upload: ProductUpload) -> Result<HttpResponse<Product>, ApiError>;

    /// Update an existing product from an administrator upload.
    async fn update(
        &self,
        product_id: i64,
        upload: ProductUpload,
    ) -> Result<HttpResponse<Product>, ApiError>;

    /// Delete a product.
    async fn delete(&self, product_id: i64) -> Result<HttpResponse<()>, ApiError>;
}
