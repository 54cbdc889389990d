//! AI Assistant Models

use serde::{Deserialize, Serialize};

/// Prompt submitted to the administrator AI assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPromptRequest {
    pub prompt: String,
}

/// The assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPromptResponse {
    pub response: String,
}
