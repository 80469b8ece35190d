use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod perplexity;

/// Chat message structure (OpenAI-compatible format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_role("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role("assistant", content)
    }

    fn with_role(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// How much web context the search-backed model pulls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchContextSize {
    Low,
    Medium,
    High,
}

impl SearchContextSize {
    /// Longer questions get a deeper search
    pub fn for_query(query: &str) -> Self {
        match query.split_whitespace().count() {
            n if n > 15 => Self::High,
            n if n > 8 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// LLM client trait - the assistant only needs plain completions
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Completion for the given conversation; returns the assistant's text
    async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        search_context: SearchContextSize,
    ) -> Result<String>;
}
