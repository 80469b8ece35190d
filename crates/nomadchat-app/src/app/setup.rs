use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::web::AssistantSlot;
use nomadchat_assistant::{AssistantConfig, ConfigError, TravelAssistant};

/// Assistant settings from the environment with CLI overrides applied
pub fn assistant_config(cli: &Cli) -> Result<AssistantConfig, ConfigError> {
    Ok(AssistantConfig::from_env()?
        .with_model(cli.model.clone())
        .with_api_url(cli.api_url.clone()))
}

/// Like [`assistant_config`], but tells the user how to fix a missing key
pub fn load_assistant_config(cli: &Cli) -> Result<AssistantConfig> {
    match assistant_config(cli) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("{}", "🔑 API Key Required".red().bold());
            eprintln!(
                "{}",
                "Please set your PERPLEXITY_API_KEY environment variable (or add it to .env).".red()
            );
            eprintln!(
                "{}",
                "You can get an API key from: https://www.perplexity.ai/".bright_black()
            );
            Err(e.into())
        }
    }
}

/// Assistant for the web server, created on first use.
///
/// A missing key is not fatal: the server keeps running and reports
/// `chatbot_ready: false` until the environment is fixed.
pub fn lazy_assistant(cli: &Cli) -> AssistantSlot {
    let model = cli.model.clone();
    let api_url = cli.api_url.clone();

    AssistantSlot::lazy(move || {
        let config = AssistantConfig::from_env()?
            .with_model(model.clone())
            .with_api_url(api_url.clone());
        Ok(TravelAssistant::from_config(&config))
    })
}
