use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use nomadchat_assistant::TravelAssistant;
use nomadchat_types::SERVER_FAILURE_REPLY;

const EXIT_WORDS: [&str; 4] = ["quit", "exit", "bye", "goodbye"];

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Exit,
    Empty,
    Summary,
    Ask(&'a str),
}

impl<'a> ReplCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let input = line.trim();
        if input.is_empty() {
            Self::Empty
        } else if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
            Self::Exit
        } else if input == "/summary" {
            Self::Summary
        } else {
            Self::Ask(input)
        }
    }
}

fn assistant_says(text: &str) {
    println!("{} {}", "Travel Assistant:".bright_cyan().bold(), text);
}

/// Run interactive REPL mode
pub async fn run_repl_mode(assistant: &TravelAssistant) -> Result<()> {
    println!("{}", "🌍 Digital Nomad Travel Chatbot".bright_blue().bold());
    println!("{}", "Hey! I'm your excited travel buddy! Ask me anything! 🚀".white());
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave, '/summary' to see the conversation so far\n".bright_black()
    );

    assistant_says("🔥 What's up! Where do you want to go or what do you need to know?\n");

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_yellow().bold()));

        match readline {
            Ok(line) => match ReplCommand::parse(&line) {
                ReplCommand::Exit => {
                    println!();
                    assistant_says("🎉 Awesome chatting! Safe travels!");
                    break;
                }
                ReplCommand::Empty => {
                    println!();
                    assistant_says("💭 I'm ready when you are!");
                }
                ReplCommand::Summary => {
                    println!("{}", assistant.summary().await.as_str().bright_black());
                }
                ReplCommand::Ask(input) => {
                    let _ = rl.add_history_entry(input);
                    println!();

                    match assistant.chat(input).await {
                        Ok(response) => assistant_says(&response),
                        Err(e) => {
                            log::error!("Assistant request failed: {:#}", e);
                            assistant_says(SERVER_FAILURE_REPLY);
                        }
                    }

                    println!();
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                assistant_says("✈️ Catch you later!");
                break;
            }
            Err(e) => {
                eprintln!("\n{} {}", "Whoops!".red(), e);
                break;
            }
        }
    }

    Ok(())
}
