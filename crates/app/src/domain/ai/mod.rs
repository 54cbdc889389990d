//! AI Assistant

pub mod models;
pub mod service;

pub use models::{AiPromptRequest, AiPromptResponse};
pub use service::*;
