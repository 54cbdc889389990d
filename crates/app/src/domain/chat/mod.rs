//! Public Chat
//!
//! REST side of the public chat only: joining, leaving and sending. The
//! live message feed arrives over a separate WebSocket channel whose relay
//! is outside this crate.

pub mod models;
pub mod service;

pub use models::{PublicChatMessage, PublicChatMessageRequest};
pub use service::*;
