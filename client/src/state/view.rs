//! `ChatView` over the reactive chat state.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use chat_widget::{ChatView, Preview, RenderedMessage, TypingId};
use leptos::prelude::*;

use super::chat::ChatState;

/// Renders controller output by updating the shared `ChatState` signal.
#[derive(Clone, Copy)]
pub struct SignalView {
    state: RwSignal<ChatState>,
}

impl SignalView {
    pub fn new(state: RwSignal<ChatState>) -> Self {
        Self { state }
    }
}

impl ChatView for SignalView {
    fn set_open(&self, open: bool) {
        self.state.update(|s| s.open = open);
    }

    fn focus_input(&self) {
        self.state.update(ChatState::request_focus);
    }

    fn clear_input(&self) {
        self.state.update(|s| s.input.clear());
    }

    fn append_message(&self, message: &RenderedMessage) {
        self.state.update(|s| s.push_message(message.clone()));
    }

    fn show_typing(&self, id: TypingId) {
        self.state.update(|s| s.add_typing(id));
    }

    fn remove_typing(&self, id: TypingId) {
        self.state.update(|s| s.remove_typing(id));
    }

    fn show_preview(&self, preview: Preview) {
        release(self.state.try_update(|s| s.set_preview(preview)).flatten());
    }

    fn clear_preview(&self) {
        release(self.state.try_update(ChatState::take_preview).flatten());
    }
}

/// Revoke the object URL behind a preview that is no longer shown.
fn release(preview: Option<Preview>) {
    let Some(url) = preview.and_then(|p| p.object_url) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            leptos::logging::warn!("revoke object url failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
