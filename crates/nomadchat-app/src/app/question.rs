use anyhow::Result;
use colored::Colorize;

use nomadchat_assistant::TravelAssistant;
use nomadchat_types::SERVER_FAILURE_REPLY;

/// Answer a single question from the command line and exit
pub async fn run_question_mode(assistant: &TravelAssistant, question: &str) -> Result<()> {
    println!("{} {}\n", "Question:".bright_yellow().bold(), question);
    println!("{}", "Getting the latest info...".bright_black());

    let response = match assistant.chat(question).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Assistant request failed: {:#}", e);
            SERVER_FAILURE_REPLY.to_string()
        }
    };

    println!("{} {}\n", "Travel Assistant:".bright_cyan().bold(), response);

    Ok(())
}
