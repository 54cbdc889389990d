//! AI assistant service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use allora::envelope::HttpResponse;

use crate::{
    client::{ApiClient, ApiError},
    domain::ai::models::{AiPromptRequest, AiPromptResponse},
};

/// AI assistant service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpAiService {
    client: Arc<ApiClient>,
}

impl HttpAiService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AiService for HttpAiService {
    async fn prompt(&self, request: AiPromptRequest) -> Result<HttpResponse<AiPromptResponse>, ApiError> {
        self.client.post("/ai", &request).await
    }
}

#[automock]
#[async_trait]
pub trait AiService: Send + Sync {
    /// Send a prompt and wait for the assistant's reply.
    async fn prompt(&self, request: AiPromptRequest) -> Result<HttpResponse<AiPromptResponse>, ApiError>;
}
