//! Public Chat Models

use serde::{Deserialize, Serialize};

/// Outgoing chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicChatMessageRequest {
    pub content: String,
}

/// A chat event as broadcast to the room. Join/leave notices reuse the same
/// shape with a different status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicChatMessage {
    pub content: String,
    pub first_name: String,
    pub last_name: String,
    pub status: Option<String>,
}
