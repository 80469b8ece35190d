use std::env;

use thiserror::Error;

/// Perplexity chat completions endpoint
pub const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";

/// Fastest Sonar model, good enough for short conversational answers
pub const DEFAULT_MODEL: &str = "sonar";

/// Environment variable holding the Perplexity API key
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";

/// Optional override of the endpoint
pub const API_URL_ENV: &str = "PERPLEXITY_API_URL";

/// Optional override of the model
pub const MODEL_ENV: &str = "PERPLEXITY_MODEL";

/// Answers are meant to be one or two sentences
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Higher temperature for a more excited tone
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Completed turns replayed to the model with each question
pub const DEFAULT_CONTEXT_TURNS: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingApiKey(&'static str),
}

/// Settings for the Perplexity-backed assistant
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub context_turns: usize,
}

impl AssistantConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: PERPLEXITY_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            context_turns: DEFAULT_CONTEXT_TURNS,
        }
    }

    /// Read the key (required) and the URL/model overrides from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;

        Ok(Self::new(api_key)
            .with_api_url(env::var(API_URL_ENV).ok())
            .with_model(env::var(MODEL_ENV).ok()))
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.is_empty()) {
            self.model = model;
        }
        self
    }
}
