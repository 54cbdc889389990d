//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::{HttpResponse, PageResponse};

use crate::{
    client::{ApiClient, ApiError},
    domain::orders::{
        models::Order,
        requests::{OrderRequest, OrderUpdateRequest},
    },
};

/// Page size of both order history listings.
const ORDERS_PAGE_SIZE: u32 = 3;

/// Orders service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: Arc<ApiClient>,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn place(&self, request: OrderRequest) -> Result<HttpResponse<String>, ApiError> {
        self.client.post("/orders", &request).await
    }

    async fn authenticated_history(
        &self,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<Order>>, ApiError> {
        self.client
            .get(&format!("/orders/authenticated?page={page}&size={ORDERS_PAGE_SIZE}"))
            .await
    }

    async fn pay_pending(&self, order_id: i64) -> Result<HttpResponse<String>, ApiError> {
        self.client
            .patch_empty(&format!("/orders/pending/id={order_id}"))
            .await
    }

    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Order>>, ApiError> {
        self.client
            .get(&format!("/orders?page={page}&size={ORDERS_PAGE_SIZE}"))
            .await
    }

    async fn update(
        &self,
        order_id: i64,
        request: OrderUpdateRequest,
    ) -> Result<HttpResponse<Order>, ApiError> {
        self.client
            .patch(&format!("/orders/id={order_id}"), &request)
            .await
    }

    async fn delete(&self, order_id: i64) -> Result<HttpResponse<()>, ApiError> {
        self.client.delete(&format!("/orders/id={order_id}")).await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order; the success body carries the payment redirect URL.
    async fn place(&self, request: OrderRequest) -> Result<HttpResponse<String>, ApiError>;

    /// Page of the signed-in visitor's own orders.
    async fn authenticated_history(
        &self,
        page: u32,
    ) -> Result<HttpResponse<PageResponse<Order>>, ApiError>;

    /// Restart payment for a pending order; the success body carries the
    /// payment redirect URL.
    async fn pay_pending(&self, order_id: i64) -> Result<HttpResponse<String>, ApiError>;

    /// Page of every order (administrator listing).
    async fn all(&self, page: u32) -> Result<HttpResponse<PageResponse<Order>>, ApiError>;

    /// Change an order's status (administrator operation).
    async fn update(
        &self,
        order_id: i64,
        request: OrderUpdateRequest,
    ) -> Result<HttpResponse<Order>, ApiError>;

    /// Delete an order (administrator operation).
    async fn delete(&self, order_id: i64) -> Result<HttpResponse<()>, ApiError>;
}
