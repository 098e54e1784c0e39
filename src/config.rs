//! Widget configuration: endpoint locations and upload limits.
//!
//! Browser hosts usually keep the defaults (same-origin paths) or pass a
//! partial JSON object; native hosts read the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{ALLOWED_IMAGE_TYPES, CHAT_PATH, MAX_IMAGE_BYTES, UPLOAD_PATH};
use crate::error::WidgetError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Origin prefix for both endpoints; empty means same-origin.
    pub base_url: String,
    pub upload_path: String,
    pub chat_path: String,
    pub max_image_bytes: u64,
    pub allowed_image_types: Vec<String>,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout_secs: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            upload_path: UPLOAD_PATH.to_owned(),
            chat_path: CHAT_PATH.to_owned(),
            max_image_bytes: MAX_IMAGE_BYTES,
            allowed_image_types: ALLOWED_IMAGE_TYPES.iter().map(|t| (*t).to_owned()).collect(),
            request_timeout_secs: None,
        }
    }
}

impl WidgetConfig {
    /// Same defaults, pointed at another origin.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), ..Self::default() }
    }

    /// Parse a (possibly partial) JSON object; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| WidgetError::Config(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }

    /// Build config from environment variables.
    ///
    /// Required:
    /// - `CHAT_WIDGET_BASE_URL`
    ///
    /// Optional:
    /// - `CHAT_WIDGET_UPLOAD_PATH`: default `/upload-chat-image`
    /// - `CHAT_WIDGET_CHAT_PATH`: default `/chatbot`
    /// - `CHAT_WIDGET_MAX_IMAGE_BYTES`: default 5 MiB
    /// - `CHAT_WIDGET_TIMEOUT_SECS`: no timeout when absent
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the base URL is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, WidgetError> {
        let base_url = std::env::var("CHAT_WIDGET_BASE_URL")
            .map_err(|_| WidgetError::Config("CHAT_WIDGET_BASE_URL not set".into()))?;
        let defaults = Self::default();

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            upload_path: std::env::var("CHAT_WIDGET_UPLOAD_PATH").unwrap_or(defaults.upload_path),
            chat_path: std::env::var("CHAT_WIDGET_CHAT_PATH").unwrap_or(defaults.chat_path),
            max_image_bytes: env_parse_u64("CHAT_WIDGET_MAX_IMAGE_BYTES")?.unwrap_or(defaults.max_image_bytes),
            allowed_image_types: defaults.allowed_image_types,
            request_timeout_secs: env_parse_u64("CHAT_WIDGET_TIMEOUT_SECS")?,
        })
    }

    #[must_use]
    pub fn upload_url(&self) -> String {
        join_url(&self.base_url, &self.upload_path)
    }

    #[must_use]
    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, &self.chat_path)
    }

    /// Whether `mime` is one of the accepted image types.
    #[must_use]
    pub fn accepts_type(&self, mime: &str) -> bool {
        self.allowed_image_types.iter().any(|t| t == mime)
    }
}

fn env_parse_u64(key: &str) -> Result<Option<u64>, WidgetError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| WidgetError::Config(format!("{key} is not a number: {raw}"))),
        Err(_) => Ok(None),
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}
