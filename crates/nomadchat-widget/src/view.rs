use nomadchat_types::{Message, Status};

/// UI handles the controller drives.
///
/// Methods take `&self`; implementations mutate the page (or a recording in
/// tests) through interior mutability.
pub trait ChatView {
    /// Current contents of the message input
    fn input_text(&self) -> String;

    /// Replace the input contents (used by preset suggestions)
    fn set_input(&self, text: &str);

    fn clear_input(&self);

    fn set_send_enabled(&self, enabled: bool);

    /// Show or hide the typing indicator
    fn set_loading(&self, visible: bool);

    /// Append a rendered entry to the end of the message list
    fn append_message(&self, message: &Message);

    /// Scroll the list to its newest entry once layout has settled
    fn scroll_to_bottom(&self);

    fn set_status(&self, status: &Status);

    fn focus_input(&self) {}
}
