//! The chat widget controller.
//!
//! DESIGN
//! ======
//! [`WidgetState`] holds the only mutable widget data (open flag, pending
//! image) and exposes its transitions as plain methods, so it can be tested
//! without any transport or view. [`ChatWidgetController`] wires it to a
//! [`ChatApi`] and a [`ChatView`] and runs the three user flows.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. State lives in a `RefCell` and is never borrowed across
//! an `.await`, so overlapping sends and uploads interleave freely. Nothing
//! serializes them: each send owns its own typing placeholder, and whichever
//! send finishes clears the pending image.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::api::{ChatApi, ChatQuery, ReplyOutcome};
use crate::config::WidgetConfig;
use crate::consts::ERROR_PREFIX;
use crate::error::Flow;
use crate::image::{ImageSource, PendingImage, validate_image};
use crate::message::{Sender, render};
use crate::view::{ChatView, Preview, TypingId};

/// Widget state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    open: bool,
    pending_image: Option<PendingImage>,
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the panel; returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Store the path of a successful upload, replacing any previous one.
    pub fn attach(&mut self, image: PendingImage) {
        self.pending_image = Some(image);
    }

    /// Drop the pending image, returning what was there.
    pub fn detach(&mut self) -> Option<PendingImage> {
        self.pending_image.take()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.pending_image.as_ref()
    }
}

pub struct ChatWidgetController<A: ChatApi, V: ChatView> {
    api: A,
    view: V,
    config: WidgetConfig,
    state: RefCell<WidgetState>,
}

impl<A: ChatApi, V: ChatView> ChatWidgetController<A, V> {
    #[must_use]
    pub fn new(api: A, view: V, config: WidgetConfig) -> Self {
        Self { api, view, config, state: RefCell::new(WidgetState::new()) }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    #[must_use]
    pub fn pending_image(&self) -> Option<PendingImage> {
        self.state.borrow().pending_image().cloned()
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    // --- Visibility ---

    /// Toggle the panel. Opening moves focus to the text field.
    pub fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        self.view.set_open(open);
        if open {
            self.view.focus_input();
        }
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.view.set_open(false);
    }

    // --- Image attach ---

    /// Validate and upload `image`. Any failure becomes one bot message and
    /// leaves the pending image as it was.
    pub async fn attach_image(&self, image: &A::Image) {
        if let Err(err) = validate_image(image, &self.config) {
            tracing::debug!(error = %err, "image rejected before upload");
            self.post_bot(&err.chat_text(Flow::Upload));
            return;
        }

        let result = match self.api.upload_image(image).await {
            Ok(response) => response.into_result(),
            Err(err) => Err(err),
        };

        match result {
            Ok(pending) => {
                tracing::debug!(path = pending.path(), "image uploaded");
                self.state.borrow_mut().attach(pending);
                self.view.show_preview(Preview { file_name: image.file_name(), object_url: image.preview_url() });
            }
            Err(err) => {
                tracing::warn!(error = %err, "image upload failed");
                self.post_bot(&err.chat_text(Flow::Upload));
            }
        }
    }

    /// Forget the pending image locally. The server copy is left alone.
    pub fn remove_image(&self) {
        self.state.borrow_mut().detach();
        self.view.clear_preview();
    }

    // --- Send ---

    /// Send the text field content plus any pending image.
    ///
    /// Empty text with no pending image does nothing at all. Otherwise the
    /// field is cleared before the request goes out, and the pending image
    /// is cleared once the round trip ends, whatever the outcome.
    pub async fn send(&self, raw_text: &str) {
        let text = raw_text.trim();
        let image = self.state.borrow().pending_image().cloned();
        if text.is_empty() && image.is_none() {
            return;
        }

        // Image-only sends render no user bubble.
        if let Some(message) = render(text, Sender::User) {
            self.view.append_message(&message);
        }
        self.view.clear_input();

        let typing = TypingId::new();
        self.view.show_typing(typing);

        let request = ChatQuery::new(text, image.as_ref());
        let result = self.api.query(&request).await;
        self.view.remove_typing(typing);

        match result {
            Ok(reply) => match reply.outcome() {
                ReplyOutcome::Answer(answer) => self.post_bot(&answer),
                ReplyOutcome::Error(error) => self.post_bot(&format!("{ERROR_PREFIX}{error}")),
                ReplyOutcome::Nothing => tracing::debug!("reply carried neither answer nor error"),
            },
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                self.post_bot(&err.chat_text(Flow::Send));
            }
        }

        self.state.borrow_mut().detach();
        self.view.clear_preview();
    }

    fn post_bot(&self, text: &str) {
        if let Some(message) = render(text, Sender::Bot) {
            self.view.append_message(&message);
        }
    }
}
