use anyhow::Result;
use clap::{CommandFactory, Parser};

use nomadchat::app::{load_assistant_config, run_question_mode, run_repl_mode, run_web_server};
use nomadchat::assistant::TravelAssistant;
use nomadchat::logging::init_logging;
use nomadchat::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli);

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "nomadchat", &mut std::io::stdout());
        return Ok(());
    }

    if cli.web {
        return run_web_server(&cli).await;
    }

    let config = load_assistant_config(&cli)?;
    let assistant = TravelAssistant::from_config(&config);

    match cli.question.as_deref() {
        Some(question) => run_question_mode(&assistant, question).await,
        None => run_repl_mode(&assistant).await,
    }
}
