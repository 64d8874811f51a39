//! LLM port - Interface to the hosted large-language-model API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One turn in a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// A single LLM request: system prompt plus user-visible messages
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    pub max_tokens: u32,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            max_tokens: 1024,
        }
    }

    /// Convenience constructor for the one-shot prompt/message exchanges
    /// every Twin operation uses
    pub fn single(system_prompt: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage {
            role: MessageRole::User,
            content: user_message.into(),
        }])
        .with_system_prompt(system_prompt)
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// Raw response text from the model
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
    pub tokens_used: u32,
}

/// Outbound port to the LLM service.
///
/// One call per operation; no streaming, no retries, no multi-turn state.
#[async_trait]
pub trait LlmPort: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error>;
}
