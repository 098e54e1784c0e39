//! # client
//!
//! Leptos + WASM front end for the chat widget. Mounts a floating chat
//! panel into the host page and drives it with the framework-free
//! `chat-widget` core: this crate only supplies the reactive state, the
//! `ChatView` over signals, and the `gloo-net` transport.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(|| view! { <App/> });
}
