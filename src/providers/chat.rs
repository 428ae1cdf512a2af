//! Chat-completion provider trait

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// One message in a chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for chat completion (deterministic temperature)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one chat completion and return the assistant text
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier
    fn model(&self) -> &str;
}
