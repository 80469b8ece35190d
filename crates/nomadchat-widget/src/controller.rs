use std::cell::Cell;

use nomadchat_types::{
    ChatReply, ChatRequest, Message, Status, APPLICATION_FAILURE_FALLBACK,
    TRANSPORT_FAILURE_FALLBACK,
};

use crate::backend::ChatBackend;
use crate::health;
use crate::view::ChatView;

/// What happened to one send attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; nothing was sent
    Empty,
    /// Another send was still outstanding
    Busy,
    Answered,
    ApplicationFailure,
    TransportFailure,
}

/// Owns the UI handles and runs the idle → sending → idle request lifecycle
pub struct ChatController<B, V> {
    backend: B,
    view: V,
    in_flight: Cell<bool>,
}

impl<B: ChatBackend, V: ChatView> ChatController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            in_flight: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.get()
    }

    /// Probe the backend once and publish the result to the header
    pub async fn check_health(&self) -> Status {
        let status = health::status_from_health(self.backend.health().await);
        log::info!("Backend status: {}", status.label);
        self.view.set_status(&status);
        status
    }

    /// Send a preset suggestion as if the user had typed it
    pub async fn send_suggestion(&self, text: &str) -> SendOutcome {
        // Keep the user's draft while a request is outstanding
        if self.in_flight.get() {
            log::debug!("Suggestion ignored: a request is already in flight");
            return SendOutcome::Busy;
        }

        self.view.set_input(text);
        self.send().await
    }

    /// Send whatever is in the input field
    pub async fn send(&self) -> SendOutcome {
        if self.in_flight.get() {
            log::debug!("Send ignored: a request is already in flight");
            return SendOutcome::Busy;
        }

        let raw = self.view.input_text();
        let text = raw.trim();
        if text.is_empty() {
            return SendOutcome::Empty;
        }

        self.in_flight.set(true);
        self.view.clear_input();
        self.view.set_send_enabled(false);
        self.append(Message::user(text));
        self.view.set_loading(true);

        let outcome = match self.backend.chat(&ChatRequest::new(text)).await {
            Ok(ChatReply {
                success: true,
                response: Some(response),
                ..
            }) => {
                self.append(Message::assistant(response));
                SendOutcome::Answered
            }
            Ok(reply) => {
                log::warn!(
                    "Assistant reported a failure: {}",
                    reply.error.as_deref().unwrap_or("no details")
                );
                self.append(Message::assistant(APPLICATION_FAILURE_FALLBACK));
                SendOutcome::ApplicationFailure
            }
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                self.append(Message::assistant(TRANSPORT_FAILURE_FALLBACK));
                SendOutcome::TransportFailure
            }
        };

        self.view.set_loading(false);
        self.view.set_send_enabled(true);
        self.view.focus_input();
        self.in_flight.set(false);

        outcome
    }

    fn append(&self, message: Message) {
        self.view.append_message(&message);
        self.view.scroll_to_bottom();
    }
}
