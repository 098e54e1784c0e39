//! Wire types for the two backend endpoints and the transport seam.
//!
//! ```text
//! POST /upload-chat-image   multipart, field "image"
//!   -> { "success": bool, "image_path"?: string, "error"?: string }
//! POST /chatbot             { "query": string, "image_path": string | null }
//!   -> { "answer"?: string, "error"?: string }
//! ```
//!
//! ERROR HANDLING
//! ==============
//! The backend reports application failures with a non-2xx status *and* an
//! `error` field, so transports decode the body whatever the status and only
//! fall back to a transport error when the body is not JSON.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::image::{ImageSource, PendingImage};

const UPLOAD_FAILED: &str = "upload failed";

/// Body of `POST /upload-chat-image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Resolve the response into the stored image path.
    ///
    /// # Errors
    ///
    /// [`WidgetError::Application`] carrying the backend's `error` text, or a
    /// fixed text when the response is unsuccessful without one.
    pub fn into_result(self) -> Result<PendingImage, WidgetError> {
        match (self.success, self.image_path, self.error) {
            (true, Some(path), _) if !path.is_empty() => Ok(PendingImage::new(path)),
            (_, _, Some(error)) => Err(WidgetError::Application(error)),
            _ => Err(WidgetError::Application(UPLOAD_FAILED.to_owned())),
        }
    }
}

/// Body of `POST /chatbot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub query: String,
    pub image_path: Option<String>,
}

impl ChatQuery {
    #[must_use]
    pub fn new(query: &str, image: Option<&PendingImage>) -> Self {
        Self { query: query.to_owned(), image_path: image.map(|i| i.path().to_owned()) }
    }
}

/// Response of `POST /chatbot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What a chat reply asks the widget to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Answer(String),
    Error(String),
    Nothing,
}

impl ChatReply {
    /// A non-empty answer wins over an error; empty strings count as absent.
    #[must_use]
    pub fn outcome(self) -> ReplyOutcome {
        match (self.answer, self.error) {
            (Some(answer), _) if !answer.is_empty() => ReplyOutcome::Answer(answer),
            (_, Some(error)) if !error.is_empty() => ReplyOutcome::Error(error),
            _ => ReplyOutcome::Nothing,
        }
    }
}

/// Decode a response body regardless of HTTP status.
///
/// # Errors
///
/// [`WidgetError::Parse`] when the body is not the expected JSON.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, WidgetError> {
    serde_json::from_str(body).map_err(|e| WidgetError::Parse(format!("status {status}: {e}")))
}

/// Transport for the two endpoints.
///
/// Futures are not `Send`: the browser implementation holds JS values.
#[async_trait::async_trait(?Send)]
pub trait ChatApi {
    type Image: ImageSource;

    /// Upload one image as multipart field `image`.
    async fn upload_image(&self, image: &Self::Image) -> Result<UploadResponse, WidgetError>;

    /// Send a chat query.
    async fn query(&self, request: &ChatQuery) -> Result<ChatReply, WidgetError>;
}
