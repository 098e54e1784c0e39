//! Reactive chat panel state.
//!
//! DESIGN
//! ======
//! Plain data with small mutators; `SignalView` wraps it in an `RwSignal`
//! and forwards controller calls here, so every UI transition is testable
//! without a reactive runtime.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chat_widget::{Preview, RenderedMessage, TypingId};

/// One row of the message list, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEntry {
    Message(RenderedMessage),
    /// "Typing..." placeholder for one in-flight send.
    Typing(TypingId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub entries: Vec<ChatEntry>,
    pub preview: Option<Preview>,
    /// Text field content.
    pub input: String,
    /// Bumped whenever the input should take focus.
    pub focus_seq: u64,
}

impl ChatState {
    pub fn push_message(&mut self, message: RenderedMessage) {
        self.entries.push(ChatEntry::Message(message));
    }

    pub fn add_typing(&mut self, id: TypingId) {
        self.entries.push(ChatEntry::Typing(id));
    }

    /// Remove only the placeholder with `id`; other entries keep their order.
    pub fn remove_typing(&mut self, id: TypingId) {
        self.entries.retain(|entry| *entry != ChatEntry::Typing(id));
    }

    /// Install a preview, returning the one it replaces.
    pub fn set_preview(&mut self, preview: Preview) -> Option<Preview> {
        self.preview.replace(preview)
    }

    pub fn take_preview(&mut self) -> Option<Preview> {
        self.preview.take()
    }

    pub fn request_focus(&mut self) {
        self.focus_seq = self.focus_seq.wrapping_add(1);
    }

    /// Number of placeholders still waiting on a reply.
    #[must_use]
    pub fn typing_count(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, ChatEntry::Typing(_))).count()
    }
}
