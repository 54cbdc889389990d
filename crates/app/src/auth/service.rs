//! Authentication service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::HttpResponse;

use crate::{
    auth::requests::{SignInRequest, SignUpRequest},
    client::{ApiClient, ApiError},
    domain::users::models::User,
};

/// Authentication service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: Arc<ApiClient>,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn sign_in(&self, request: SignInRequest) -> Result<HttpResponse<()>, ApiError> {
        self.client.post("/authentication/sign-in", &request).await
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<HttpResponse<User>, ApiError> {
        self.client.post("/authentication/sign-up", &request).await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate; on success the session cookie is set on the shared
    /// client. Validation failures come back in the error envelope's
    /// field map.
    async fn sign_in(&self, request: SignInRequest) -> Result<HttpResponse<()>, ApiError>;

    /// Register a new account.
    async fn sign_up(&self, request: SignUpRequest) -> Result<HttpResponse<User>, ApiError>;
}
