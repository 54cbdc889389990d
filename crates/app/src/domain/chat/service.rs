//! Public chat service.
//!
//! These endpoints answer with the bare chat message instead of the usual
//! success envelope, so they go through the client's raw decoding path.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    client::{ApiClient, ApiError},
    domain::chat::models::{PublicChatMessage, PublicChatMessageRequest},
};

/// Public chat service backed by the live backend.
#[derive(Debug, Clone)]
pub struct HttpChatService {
    client: Arc<ApiClient>,
}

impl HttpChatService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn connect(&self) -> Result<PublicChatMessage, ApiError> {
        self.client
            .post_raw_empty("/chat-messages/authenticated/connect-to-public-chat")
            .await
    }

    async fn disconnect(&self) -> Result<PublicChatMessage, ApiError> {
        self.client
            .post_raw_empty("/chat-messages/authenticated/disconnect-from-public-chat")
            .await
    }

    async fn send(&self, request: PublicChatMessageRequest) -> Result<PublicChatMessage, ApiError> {
        self.client
            .post_raw("/chat-messages/authenticated/send-public-message", &request)
            .await
    }
}

#[automock]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Join the public chat room; the broadcast join notice comes back.
    async fn connect(&self) -> Result<PublicChatMessage, ApiError>;

    /// Leave the public chat room; the broadcast leave notice comes back.
    async fn disconnect(&self) -> Result<PublicChatMessage, ApiError>;

    /// Send a message to the room.
    async fn send(&self, request: PublicChatMessageRequest) -> Result<PublicChatMessage, ApiError>;
}
