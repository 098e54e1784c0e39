//! Image attachments: the source abstraction, validation, and the pending
//! server path.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// A user-selected file offered for upload.
///
/// The browser client wraps `web_sys::File`; native hosts use [`ImageFile`].
pub trait ImageSource {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// A local reference the UI can display before anything is sent, if the
    /// platform has one (a browser object URL).
    fn preview_url(&self) -> Option<String>;
}

/// In-memory image for native hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    #[must_use]
    pub fn new(file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.to_owned(), mime_type: mime_type.to_owned(), bytes }
    }
}

impl ImageSource for ImageFile {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn preview_url(&self) -> Option<String> {
        None
    }
}

/// Check type then size, before any request is made.
///
/// # Errors
///
/// [`WidgetError::InvalidImageType`] for types outside the allow list,
/// [`WidgetError::ImageTooLarge`] for files over `max_image_bytes`.
pub fn validate_image<S: ImageSource + ?Sized>(source: &S, config: &WidgetConfig) -> Result<(), WidgetError> {
    let mime = source.mime_type();
    if !config.accepts_type(&mime) {
        return Err(WidgetError::InvalidImageType { mime });
    }
    let size = source.size();
    if size > config.max_image_bytes {
        return Err(WidgetError::ImageTooLarge { size, max: config.max_image_bytes });
    }
    Ok(())
}

/// Server-side path of an uploaded image awaiting the next send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage(String);

impl PendingImage {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}
