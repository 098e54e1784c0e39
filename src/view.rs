//! UI abstraction the controller renders through.
//!
//! Implementations own the actual elements (Leptos signals in `client`, a
//! recorder in tests). Every method is a plain state change; none of them
//! may call back into the controller.

use crate::message::RenderedMessage;

/// Identifies one typing placeholder so overlapping sends each remove
/// only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypingId(pub uuid::Uuid);

impl TypingId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TypingId {
    fn default() -> Self {
        Self::new()
    }
}

/// Local preview of the pending image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    /// Browser object URL of the selected file. Never the server path.
    pub object_url: Option<String>,
}

pub trait ChatView {
    fn set_open(&self, open: bool);
    fn focus_input(&self);
    fn clear_input(&self);
    /// Append a bubble and keep the list scrolled to it.
    fn append_message(&self, message: &RenderedMessage);
    fn show_typing(&self, id: TypingId);
    fn remove_typing(&self, id: TypingId);
    /// Show `preview` with a remove affordance, replacing any previous one.
    fn show_preview(&self, preview: Preview);
    fn clear_preview(&self);
}
