//! Chat panel widget core.
//!
//! This crate owns everything the chat widget does that is not DOM plumbing:
//! panel visibility, the pending image attachment, client-side image
//! validation, request payloads for the two backend endpoints, and turning
//! raw reply text into paragraphs with safe links. The host UI (the Leptos
//! `client` crate, or anything else) implements [`view::ChatView`] and a
//! [`api::ChatApi`] transport, then forwards user events to
//! [`controller::ChatWidgetController`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Widget state and the toggle / attach / send flows |
//! | [`api`] | Wire types for both endpoints and the transport trait |
//! | [`http`] | Native `reqwest` transport (feature `http`) |
//! | [`view`] | UI abstraction the controller renders through |
//! | [`message`] | Message rendering: paragraphs and link detection |
//! | [`image`] | Image sources, validation, and the pending image path |
//! | [`config`] | Endpoint and limit configuration |
//! | [`error`] | Error taxonomy and chat-facing error text |
//! | [`consts`] | Limits, paths, and fixed user-visible strings |

pub mod api;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod image;
pub mod message;
pub mod view;

pub use api::{ChatApi, ChatQuery, ChatReply, UploadResponse};
pub use config::WidgetConfig;
pub use controller::{ChatWidgetController, WidgetState};
pub use error::WidgetError;
pub use image::{ImageFile, ImageSource, PendingImage};
pub use message::{RenderedMessage, Sender};
pub use view::{ChatView, Preview, TypingId};
