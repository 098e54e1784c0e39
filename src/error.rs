//! Error taxonomy for the widget flows.
//!
//! Every variant is recovered locally: the controller turns it into a single
//! bot message via [`WidgetError::chat_text`] and keeps running. Transport
//! details only ever reach the log.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::consts::{ERROR_PREFIX, INVALID_TYPE_TEXT, SEND_FAILED_TEXT, TOO_LARGE_TEXT, UPLOAD_FAILED_TEXT};

/// Errors produced by validation, transports, and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The selected file is not one of the accepted image types.
    #[error("unsupported image type: {mime}")]
    InvalidImageType { mime: String },

    /// The selected file exceeds the configured size limit.
    #[error("image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: u64, max: u64 },

    /// The backend answered with an `error` field.
    #[error("{0}")]
    Application(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// A configuration value is missing or malformed.
    #[error("config error: {0}")]
    Config(String),
}

/// Which flow an error surfaced in; selects the generic failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Upload,
    Send,
}

impl WidgetError {
    /// Text of the bot message shown for this error.
    #[must_use]
    pub fn chat_text(&self, flow: Flow) -> String {
        match self {
            Self::InvalidImageType { .. } => INVALID_TYPE_TEXT.to_owned(),
            Self::ImageTooLarge { .. } => TOO_LARGE_TEXT.to_owned(),
            Self::Application(message) => format!("{ERROR_PREFIX}{message}"),
            Self::Transport(_) | Self::Parse(_) | Self::Config(_) => match flow {
                Flow::Upload => UPLOAD_FAILED_TEXT.to_owned(),
                Flow::Send => SEND_FAILED_TEXT.to_owned(),
            },
        }
    }

    /// Whether the error was raised before any request was made.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidImageType { .. } | Self::ImageTooLarge { .. })
    }
}
