use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use nomadchat_types::{
    ChatReply, ChatRequest, HealthReport, Message, Status, CHAT_PATH, HEALTH_PATH,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use crate::backend::{ChatBackend, TransportError};
use crate::controller::ChatController;
use crate::dom;
use crate::markdown;
use crate::utils;
use crate::view::ChatView;

/// Delay before scrolling so freshly appended entries have been laid out
const SCROLL_SETTLE_MS: u32 = 100;

/// Selector for the preset question buttons; the text sent is `data-message`
/// or, failing that, the button label.
const SUGGESTION_SELECTOR: &str = ".suggestion-btn";

/// `fetch`-backed client for the assistant API
pub struct FetchBackend {
    api_base: String,
}

impl FetchBackend {
    pub fn new(api_base: String) -> Self {
        Self { api_base }
    }

    fn url(&self, path: &str) -> String {
        utils::build_api_url(&self.api_base, path)
    }
}

#[async_trait(?Send)]
impl ChatBackend for FetchBackend {
    async fn health(&self) -> Result<HealthReport, TransportError> {
        let response = Request::get(&self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let response = Request::post(&self.url(CHAT_PATH))
            .json(request)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// The page elements the widget drives
pub struct DomView {
    document: Document,
    input: HtmlTextAreaElement,
    send_button: HtmlButtonElement,
    messages: Element,
    loading: HtmlElement,
    status_dot: Element,
    status_text: Element,
}

impl DomView {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        Ok(Self {
            input: dom::get_textarea_by_id(&document, "messageInput")?,
            send_button: dom::get_button_by_id(&document, "sendButton")?,
            messages: dom::get_element_by_id(&document, "messagesContainer")?,
            loading: dom::get_html_element_by_id(&document, "loadingIndicator")?,
            status_dot: dom::get_element_by_id(&document, "statusIndicator")?,
            status_text: dom::get_element_by_id(&document, "statusText")?,
            document,
        })
    }
}

impl ChatView for DomView {
    fn input_text(&self) -> String {
        self.input.value()
    }

    fn set_input(&self, text: &str) {
        self.input.set_value(text);
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.send_button.set_disabled(!enabled);
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            dom::show_element(&self.loading);
        } else {
            dom::hide_element(&self.loading);
        }
    }

    fn append_message(&self, message: &Message) {
        let entry = match dom::create_element_with_class(
            &self.document,
            "div",
            &markdown::entry_class(message.sender),
        ) {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("Failed to create message entry: {:?}", e);
                return;
            }
        };
        entry.set_inner_html(&markdown::render_entry(message));
        if let Err(e) = self.messages.append_child(&entry) {
            log::error!("Failed to append message entry: {:?}", e);
        }
    }

    fn scroll_to_bottom(&self) {
        let container = self.messages.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SCROLL_SETTLE_MS).await;
            dom::scroll_to_bottom(&container);
        });
    }

    fn set_status(&self, status: &Status) {
        self.status_dot
            .set_class_name(&format!("status-dot {}", status.kind.css_class()));
        self.status_text.set_text_content(Some(&status.label));
    }

    fn focus_input(&self) {
        let _ = self.input.focus();
    }
}

type WidgetController = ChatController<FetchBackend, DomView>;

pub struct ChatApp {
    document: Document,
    controller: Rc<WidgetController>,
}

impl ChatApp {
    pub fn new(api_base: String) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

        let view = DomView::new(document.clone())?;
        let controller = ChatController::new(FetchBackend::new(api_base), view);

        Ok(Self {
            document,
            controller: Rc::new(controller),
        })
    }

    pub async fn start(self) -> Result<(), JsValue> {
        self.controller.view().set_status(&Status::connecting());
        self.controller.view().set_loading(false);

        self.setup_send_button()?;
        self.setup_enter_key()?;
        self.setup_suggestions()?;

        self.controller.check_health().await;
        self.controller.view().focus_input();

        Ok(())
    }

    fn setup_send_button(&self) -> Result<(), JsValue> {
        let send_btn = dom::get_element_by_id(&self.document, "sendButton")?;
        let controller = self.controller.clone();

        dom::add_click_listener(&send_btn, move || {
            spawn_send(controller.clone());
        })
    }

    fn setup_enter_key(&self) -> Result<(), JsValue> {
        let input = dom::get_textarea_by_id(&self.document, "messageInput")?;
        let controller = self.controller.clone();

        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                spawn_send(controller.clone());
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn setup_suggestions(&self) -> Result<(), JsValue> {
        let buttons = self.document.query_selector_all(SUGGESTION_SELECTOR)?;

        for index in 0..buttons.length() {
            let Some(button) = buttons
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };

            let text = button
                .get_attribute("data-message")
                .or_else(|| button.text_content())
                .unwrap_or_default();
            let controller = self.controller.clone();

            dom::add_click_listener(&button, move || {
                let controller = controller.clone();
                let text = text.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = controller.send_suggestion(&text).await;
                    log::debug!("Suggestion send finished: {:?}", outcome);
                });
            })?;
        }

        Ok(())
    }
}

fn spawn_send(controller: Rc<WidgetController>) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = controller.send().await;
        log::debug!("Send finished: {:?}", outcome);
    });
}
