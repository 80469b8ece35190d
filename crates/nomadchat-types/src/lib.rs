//! Core types shared by the nomadchat crates
//!
//! Wire formats spoken between the browser widget and the API server, the
//! widget's message/status model, and the fixed user-facing strings.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Chat endpoint path
pub const CHAT_PATH: &str = "/api/chat";

/// Health endpoint path
pub const HEALTH_PATH: &str = "/api/health";

/// Stats endpoint path
pub const STATS_PATH: &str = "/api/stats";

/// Shown by the widget when the server answers with `success: false`
pub const APPLICATION_FAILURE_FALLBACK: &str =
    "Oops! My travel radar glitched for a second. Try asking again? 🤔";

/// Shown by the widget when the request never got a usable answer
pub const TRANSPORT_FAILURE_FALLBACK: &str =
    "Sorry, I couldn't reach the travel assistant. Please check your connection and try again.";

/// Server reply to a blank message
pub const EMPTY_MESSAGE_REPLY: &str = "💭 I'm ready when you are! Ask me anything about travel!";

/// Server reply when the assistant could not produce an answer
pub const SERVER_FAILURE_REPLY: &str = "Oops! Something went wrong. Try again? 🤔";

/// Health banner returned by the server
pub const HEALTH_BANNER: &str = "🌍 Travel Assistant API is running!";

// ============================================================================
// Wire Types
// ============================================================================

fn default_conversation_id() -> Option<String> {
    Some("default".to_string())
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(
        default = "default_conversation_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Request as the widget sends it: just the message text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id: None,
        }
    }
}

/// Reply of `POST /api/chat`
///
/// Only `success` is required; older servers omit `response` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatReply {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failed(response: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: Some(response.into()),
            error: Some(error.into()),
        }
    }
}

/// Reply of `GET /api/health`
///
/// The widget only reads `chatbot_ready`; the rest is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    pub chatbot_ready: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

/// Reply of `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatsReport {
    Available {
        total_conversations: usize,
        last_activity: Option<DateTime<Utc>>,
    },
    Unavailable {
        error: String,
    },
}

// ============================================================================
// Widget Model
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// A rendered chat entry; never changes once shown
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }
}

/// Visual state of the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Online,
    Offline,
    Connecting,
}

impl StatusKind {
    /// CSS class of the indicator dot
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Online => "online",
            StatusKind::Offline => "offline",
            StatusKind::Connecting => "connecting",
        }
    }
}

/// Backend availability as shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub label: String,
}

impl Status {
    pub fn online() -> Self {
        Self {
            kind: StatusKind::Online,
            label: "Online".to_string(),
        }
    }

    pub fn connecting() -> Self {
        Self {
            kind: StatusKind::Connecting,
            label: "Connecting...".to_string(),
        }
    }

    pub fn offline() -> Self {
        Self {
            kind: StatusKind::Offline,
            label: "Offline".to_string(),
        }
    }

    /// Server is up but the assistant has not been initialized yet
    pub fn warming_up() -> Self {
        Self {
            kind: StatusKind::Offline,
            label: "Connecting...".to_string(),
        }
    }
}
