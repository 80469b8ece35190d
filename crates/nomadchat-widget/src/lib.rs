//! Browser chat widget for the travel assistant.
//!
//! The controller, health probe and renderer are plain Rust behind the
//! [`ChatView`] and [`ChatBackend`] traits; the DOM and `fetch` adapters that
//! implement them are only built for `wasm32`.

mod backend;
mod controller;
mod health;
mod markdown;
mod utils;
mod view;

#[cfg(target_arch = "wasm32")]
mod chat_ui;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use backend::{ChatBackend, TransportError};
pub use controller::{ChatController, SendOutcome};
pub use health::status_from_health;
pub use markdown::{entry_class, format_content, render_entry};
pub use utils::{build_api_url, escape_html, format_time};
pub use view::ChatView;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("nomadchat widget initialized");
}

/// Wire the chat widget into the current page and run the startup health check.
///
/// `api_base` prefixes the `/api/*` paths; pass nothing when the page is served
/// by the API server itself.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init_chat_widget(api_base: Option<String>) -> Result<(), JsValue> {
    let api_base = api_base.unwrap_or_default();
    log::info!("Starting chat widget (api base: {:?})", api_base);
    chat_ui::ChatApp::new(api_base)?.start().await
}
