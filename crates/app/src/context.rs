//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, HttpAuthService},
    client::{ApiClient, ApiConfig, ApiError},
    domain::{
        ai::{AiService, HttpAiService},
        catalog::{CatalogService, HttpCatalogService},
        chat::{ChatService, HttpChatService},
        orders::{HttpOrdersService, OrdersService},
        products::{HttpProductsService, ProductsService},
        reviews::{HttpReviewsService, ReviewsService},
        users::{HttpUsersService, UsersService},
    },
};

/// Every backend service behind one handle, sharing a single session-bearing
/// HTTP client.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub ai: Arc<dyn AiService>,
    pub chat: Arc<dyn ChatService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the full service set from backend connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Arc::new(ApiClient::new(config)?);

        Ok(Self {
            auth: Arc::new(HttpAuthService::new(Arc::clone(&client))),
            products: Arc::new(HttpProductsService::new(Arc::clone(&client))),
            catalog: Arc::new(HttpCatalogService::new(Arc::clone(&client))),
            orders: Arc::new(HttpOrdersService::new(Arc::clone(&client))),
            users: Arc::new(HttpUsersService::new(Arc::clone(&client))),
            reviews: Arc::new(HttpReviewsService::new(Arc::clone(&client))),
            ai: Arc::new(HttpAiService::new(Arc::clone(&client))),
            chat: Arc::new(HttpChatService::new(client)),
        })
    }
}
