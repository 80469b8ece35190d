use crate::client::{ChatMessage, LlmClient, SearchContextSize};
use crate::config::AssistantConfig;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct WebSearchOptions {
    search_context_size: SearchContextSize,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    web_search_options: WebSearchOptions,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Perplexity Sonar client (OpenAI-compatible chat completions with web search)
pub struct PerplexityClient {
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl PerplexityClient {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for PerplexityClient {
    async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        search_context: SearchContextSize,
    ) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            web_search_options: WebSearchOptions {
                search_context_size: search_context,
            },
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        log::debug!(
            "POST {} ({} messages, search context {})",
            self.api_url,
            messages.len(),
            search_context.as_str()
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Perplexity API error: {} - {}",
                status,
                crate::safe_truncate(&error_text, 200)
            ));
        }

        let response_text = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&response_text)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("No choices in Perplexity response"))
    }
}
