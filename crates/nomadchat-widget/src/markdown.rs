use std::sync::OnceLock;

use nomadchat_types::{Message, Sender};
use regex::Regex;

use crate::utils;

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"))
}

fn italic_pattern() -> &'static Regex {
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    ITALIC.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"))
}

/// Render the small markdown subset the assistant uses.
///
/// Substitutions run in order: `**bold**`, then `*italic*`, then newlines.
/// The text is HTML-escaped first, so only the markup produced here survives.
pub fn format_content(text: &str) -> String {
    let escaped = utils::escape_html(text);
    let bolded = bold_pattern().replace_all(&escaped, "<strong>${1}</strong>");
    let emphasized = italic_pattern().replace_all(&bolded, "<em>${1}</em>");
    emphasized.replace('\n', "<br>")
}

fn avatar(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "👤",
        Sender::Assistant => "🌍",
    }
}

/// Class list of the entry container; the sender picks the styling
pub fn entry_class(sender: Sender) -> String {
    format!("message {}-message", sender.as_str())
}

/// Inner markup of one message entry
pub fn render_entry(message: &Message) -> String {
    format!(
        r#"<div class="message-avatar">{}</div><div class="message-content"><div class="message-text">{}</div><div class="message-time">{}</div></div>"#,
        avatar(message.sender),
        format_content(&message.content),
        utils::format_time(&message.timestamp)
    )
}
