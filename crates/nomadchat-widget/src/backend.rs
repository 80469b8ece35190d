use async_trait::async_trait;
use nomadchat_types::{ChatReply, ChatRequest, HealthReport};
use thiserror::Error;

/// Failure to get a usable HTTP answer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// The travel assistant API as seen from the widget.
///
/// Futures are `?Send`: the widget runs on the browser's single thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// `GET /api/health`
    async fn health(&self) -> Result<HealthReport, TransportError>;

    /// `POST /api/chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}
