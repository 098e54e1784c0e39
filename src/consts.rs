//! Shared constants: upload limits, endpoint paths, and chat strings.

/// Largest accepted image, in bytes (inclusive).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted by the attach flow.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Multipart image upload endpoint.
pub const UPLOAD_PATH: &str = "/upload-chat-image";

/// Chat query endpoint.
pub const CHAT_PATH: &str = "/chatbot";

/// Multipart field name carrying the image bytes.
pub const UPLOAD_FIELD: &str = "image";

pub const INVALID_TYPE_TEXT: &str = "Only JPG and PNG images are supported.";
pub const TOO_LARGE_TEXT: &str = "Image size should be less than 5MB.";
pub const UPLOAD_FAILED_TEXT: &str = "Failed to upload image. Please try again.";
pub const SEND_FAILED_TEXT: &str = "Sorry, something went wrong. Please try again.";
pub const TYPING_TEXT: &str = "Typing...";
pub const ERROR_PREFIX: &str = "Error: ";
