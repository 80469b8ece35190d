//! nomadchat application library
//!
//! CLI definition, the terminal front-ends and the HTTP server that backs the
//! browser widget.

pub use nomadchat_assistant as assistant;
pub use nomadchat_types as types;

pub mod app;
pub mod cli;
pub mod logging;
pub mod web;

pub use cli::Cli;
pub use web::{AppState, AssistantSlot, WebServer, WebServerConfig};
