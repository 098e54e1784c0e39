//! Browser transport for the chat endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the selected
//! `web_sys::File` sent as multipart `FormData`.
//! Native builds keep only the pure helpers so they can be unit tested.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are decoded whatever the status; the core maps transport and
//! parse failures to the generic chat messages.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chat_widget::WidgetConfig;

/// `gloo-net` implementation of `ChatApi`.
///
/// The browser applies its own request timeout; `request_timeout_secs` is
/// not enforced here.
#[derive(Clone, Debug)]
pub struct GlooChatApi {
    upload_url: String,
    chat_url: String,
}

impl GlooChatApi {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { upload_url: config.upload_url(), chat_url: config.chat_url() }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

/// `File.size` arrives as a JS number; clamp anything odd to zero.
#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_from_js(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size as u64 } else { 0 }
}

/// `accept` attribute for the hidden file picker.
pub fn accept_attribute(config: &WidgetConfig) -> String {
    config.allowed_image_types.join(",")
}

#[cfg(feature = "csr")]
pub use browser::BrowserImage;

#[cfg(feature = "csr")]
mod browser {
    use chat_widget::api::{ChatApi, ChatQuery, ChatReply, UploadResponse, decode_body};
    use chat_widget::consts::UPLOAD_FIELD;
    use chat_widget::{ImageSource, WidgetError};

    use super::{GlooChatApi, size_from_js};

    /// A file picked through the hidden `<input type="file">`.
    #[derive(Clone, Debug)]
    pub struct BrowserImage(web_sys::File);

    impl BrowserImage {
        pub fn new(file: web_sys::File) -> Self {
            Self(file)
        }
    }

    impl ImageSource for BrowserImage {
        fn file_name(&self) -> String {
            self.0.name()
        }

        fn mime_type(&self) -> String {
            self.0.type_()
        }

        fn size(&self) -> u64 {
            size_from_js(self.0.size())
        }

        fn preview_url(&self) -> Option<String> {
            match web_sys::Url::create_object_url_with_blob(&self.0) {
                Ok(url) => Some(url),
                Err(e) => {
                    leptos::logging::warn!("object url failed: {e:?}");
                    None
                }
            }
        }
    }

    fn js_error(e: wasm_bindgen::JsValue) -> WidgetError {
        WidgetError::Transport(format!("{e:?}"))
    }

    async fn read(resp: gloo_net::http::Response) -> Result<(u16, String), WidgetError> {
        let status = resp.status();
        let text = resp.text().await.map_err(|e| WidgetError::Transport(e.to_string()))?;
        Ok((status, text))
    }

    #[async_trait::async_trait(?Send)]
    impl ChatApi for GlooChatApi {
        type Image = BrowserImage;

        async fn upload_image(&self, image: &BrowserImage) -> Result<UploadResponse, WidgetError> {
            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_blob_and_filename(UPLOAD_FIELD, &image.0, &image.0.name())
                .map_err(js_error)?;

            let resp = gloo_net::http::Request::post(self.upload_url())
                .body(form)
                .map_err(|e| WidgetError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| WidgetError::Transport(e.to_string()))?;
            let (status, text) = read(resp).await?;
            decode_body(status, &text)
        }

        async fn query(&self, request: &ChatQuery) -> Result<ChatReply, WidgetError> {
            let resp = gloo_net::http::Request::post(self.chat_url())
                .json(request)
                .map_err(|e| WidgetError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| WidgetError::Transport(e.to_string()))?;
            let (status, text) = read(resp).await?;
            decode_body(status, &text)
        }
    }
}
