//! Native HTTP transport built on `reqwest`.
//!
//! Thin wrapper over the two endpoints; decoding lives in [`crate::api`] so
//! it stays testable without a server.

use std::time::Duration;

use crate::api::{ChatApi, ChatQuery, ChatReply, UploadResponse, decode_body};
use crate::config::WidgetConfig;
use crate::consts::UPLOAD_FIELD;
use crate::error::WidgetError;
use crate::image::{ImageFile, ImageSource};

pub struct HttpChatApi {
    http: reqwest::Client,
    upload_url: String,
    chat_url: String,
}

impl HttpChatApi {
    /// Build a client for the endpoints in `config`.
    ///
    /// # Errors
    ///
    /// [`WidgetError::Config`] if the underlying HTTP client cannot be built.
    pub fn new(config: &WidgetConfig) -> Result<Self, WidgetError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| WidgetError::Config(e.to_string()))?;
        Ok(Self { http, upload_url: config.upload_url(), chat_url: config.chat_url() })
    }

    async fn read_body(response: reqwest::Response) -> Result<(u16, String), WidgetError> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| WidgetError::Transport(e.to_string()))?;
        Ok((status, text))
    }
}

#[async_trait::async_trait(?Send)]
impl ChatApi for HttpChatApi {
    type Image = ImageFile;

    async fn upload_image(&self, image: &ImageFile) -> Result<UploadResponse, WidgetError> {
        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name())
            .mime_str(&image.mime_type())
            .map_err(|e| WidgetError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let (status, text) = Self::read_body(response).await?;
        tracing::debug!(status, "upload response");
        decode_body(status, &text)
    }

    async fn query(&self, request: &ChatQuery) -> Result<ChatReply, WidgetError> {
        let response = self
            .http
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let (status, text) = Self::read_body(response).await?;
        tracing::debug!(status, "chat response");
        decode_body(status, &text)
    }
}
