use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use tokio::sync::Mutex;

use crate::client::perplexity::PerplexityClient;
use crate::client::{ChatMessage, LlmClient, SearchContextSize};
use crate::config::{AssistantConfig, DEFAULT_CONTEXT_TURNS};

/// Persona sent as the first message of every completion
pub const SYSTEM_PROMPT: &str = "You are an EXCITED, friendly digital nomad travel assistant! 🌍

RULES - FOLLOW THESE EXACTLY:
✅ Keep responses SHORT and DIRECT (1-2 sentences max)
✅ Use an EXCITING, enthusiastic tone with emojis
✅ Give SPECIFIC, actionable info - no fluff or long explanations
✅ Be SUPER friendly and encouraging
✅ NO lengthy descriptions or unnecessary details
✅ Focus on what they NEED to know RIGHT NOW

For travel questions, give QUICK answers about:
- Visa requirements (just the essentials)
- Internet speeds (numbers and quick verdict)
- Costs (specific prices, direct comparison)
- Best locations (top 2-3 picks with why)
- Coworking/accommodation (best options only)

Examples of perfect responses:
\"Portugal's D7 visa needs €2,760/month income proof - totally doable! 🇵🇹 Apply online, takes 2-3 months.\"
\"Lisbon gets 200+ Mbps, perfect for remote work! 💻 Fiber everywhere, tons of coworking spaces.\"
\"Bali is CHEAP! $500-800/month gets you a nice place. Food $2-5/meal. You'll save tons! 💰\"

Be EXCITED to help but keep it SHORT and USEFUL!";

/// One answered question
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub user_message: String,
    pub assistant_response: String,
    pub timestamp: DateTime<Utc>,
    pub search_triggered: bool,
}

/// Snapshot for `/api/stats`
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationStats {
    pub total_conversations: usize,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Conversational travel assistant with an in-memory history
pub struct TravelAssistant {
    client: Arc<dyn LlmClient>,
    system_prompt: String,
    context_turns: usize,
    history: Mutex<Vec<ConversationTurn>>,
}

impl TravelAssistant {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            system_prompt: SYSTEM_PROMPT.to_string(),
            context_turns: DEFAULT_CONTEXT_TURNS,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Assistant talking to Perplexity with the given settings
    pub fn from_config(config: &AssistantConfig) -> Self {
        let client = Arc::new(PerplexityClient::new(config));
        log::info!("Travel assistant ready (model: {})", client.model());
        Self::new(client).with_context_turns(config.context_turns)
    }

    pub fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }

    /// System prompt followed by the most recent turns
    pub async fn context_messages(&self) -> Vec<ChatMessage> {
        let history = self.history.lock().await;
        let start = history.len().saturating_sub(self.context_turns);

        let mut messages = vec![ChatMessage::system(&self.system_prompt)];
        for turn in &history[start..] {
            messages.push(ChatMessage::user(&turn.user_message));
            messages.push(ChatMessage::assistant(&turn.assistant_response));
        }
        messages
    }

    /// Answer a question and remember the exchange.
    ///
    /// Failed completions are not recorded.
    pub async fn chat(&self, user_input: &str) -> Result<String> {
        let mut messages = self.context_messages().await;
        messages.push(ChatMessage::user(user_input));

        let search_context = SearchContextSize::for_query(user_input);
        log::debug!(
            "Asking assistant: {} (search context: {})",
            crate::safe_truncate(user_input, 80),
            search_context.as_str()
        );

        let response = self
            .client
            .chat_completion(&messages, search_context)
            .await?;

        self.history.lock().await.push(ConversationTurn {
            user_message: user_input.to_string(),
            assistant_response: response.clone(),
            timestamp: Utc::now(),
            search_triggered: true,
        });

        Ok(response)
    }

    pub async fn history(&self) -> Vec<ConversationTurn> {
        self.history.lock().await.clone()
    }

    pub async fn stats(&self) -> ConversationStats {
        let history = self.history.lock().await;
        ConversationStats {
            total_conversations: history.len(),
            last_activity: history.last().map(|turn| turn.timestamp),
        }
    }

    /// One-line summary, e.g. `3 messages • 3 searches • Started 14:05`
    pub async fn summary(&self) -> String {
        let history = self.history.lock().await;
        let Some(first) = history.first() else {
            return "No conversation yet".to_string();
        };

        let searches = history.iter().filter(|turn| turn.search_triggered).count();
        format!(
            "{} messages • {} searches • Started {}",
            history.len(),
            searches,
            first.timestamp.with_timezone(&Local).format("%H:%M")
        )
    }
}
