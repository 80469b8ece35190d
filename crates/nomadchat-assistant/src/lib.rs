//! # nomadchat-assistant
//!
//! The digital-nomad travel assistant that answers `/api/chat`:
//! - a Perplexity (Sonar) chat-completions client behind the `LlmClient` trait
//! - a short rolling conversation context
//! - web-search depth chosen from the length of the question
//!
//! ## Example
//!
//! ```rust,no_run
//! use nomadchat_assistant::{AssistantConfig, TravelAssistant};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AssistantConfig::from_env()?;
//!     let assistant = TravelAssistant::from_config(&config);
//!
//!     let answer = assistant.chat("What's the internet speed in Lisbon?").await?;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod client;
pub mod config;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use assistant::{ConversationStats, ConversationTurn, TravelAssistant, SYSTEM_PROMPT};

pub use client::{
    perplexity::PerplexityClient,
    ChatMessage,
    LlmClient,
    SearchContextSize,
};

pub use config::{
    AssistantConfig,
    ConfigError,
    API_KEY_ENV,
    DEFAULT_MODEL,
    PERPLEXITY_API_URL,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}
