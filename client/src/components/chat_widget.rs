//! Floating chat panel: toggle button, message list, image preview, input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM events are forwarded to the core `ChatWidgetController`; everything
//! the panel shows comes from the `ChatState` signal that `SignalView`
//! updates. No flow logic lives here.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use chat_widget::consts::TYPING_TEXT;
use chat_widget::message::Segment;
use chat_widget::{RenderedMessage, WidgetConfig};
use leptos::prelude::*;

use crate::net::api::accept_attribute;
use crate::state::chat::{ChatEntry, ChatState};

#[cfg(feature = "csr")]
type Controller = chat_widget::ChatWidgetController<crate::net::api::GlooChatApi, crate::state::view::SignalView>;

/// The chat widget. Expects `RwSignal<ChatState>` and `WidgetConfig` in context.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();
    let accept = accept_attribute(&config);

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    let controller = StoredValue::new_local(std::rc::Rc::new(Controller::new(
        crate::net::api::GlooChatApi::new(&config),
        crate::state::view::SignalView::new(chat),
        config,
    )));

    Effect::new(move || {
        let _ = chat.with(|s| s.entries.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        let seq = chat.with(|s| s.focus_seq);
        if seq == 0 {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    leptos::logging::warn!("focus failed: {e:?}");
                }
            }
        }
    });

    let on_toggle = move |_| {
        #[cfg(feature = "csr")]
        controller.with_value(|c| c.toggle());
    };

    let on_close = move |_| {
        #[cfg(feature = "csr")]
        controller.with_value(|c| c.close());
    };

    let do_send = move || {
        #[cfg(feature = "csr")]
        {
            let text = chat.with_untracked(|s| s.input.clone());
            let c = controller.get_value();
            leptos::task::spawn_local(async move {
                c.send(&text).await;
            });
        }
    };

    let on_send = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_attach = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = file_ref.get() {
                el.click();
            }
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(file) = file_ref.get().and_then(|el| el.files()).and_then(|files| files.get(0)) else {
                return;
            };
            let c = controller.get_value();
            leptos::task::spawn_local(async move {
                c.attach_image(&crate::net::api::BrowserImage::new(file)).await;
            });
        }
    };

    let on_remove_image = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        #[cfg(feature = "csr")]
        controller.with_value(|c| c.remove_image());
    };

    view! {
        <div class="chatbot">
            <button class="chatbot-toggle" title="Chat" on:click=on_toggle>
                "💬"
            </button>

            <div class="chatbot-window" class:active=move || chat.with(|s| s.open)>
                <div class="chatbot-header">
                    <span class="chatbot-title">"Assistant"</span>
                    <button class="chatbot-close" title="Close" on:click=on_close>
                        "×"
                    </button>
                </div>

                <div class="chatbot-messages" node_ref=messages_ref>
                    {move || chat.with(|s| s.entries.iter().map(entry_view).collect::<Vec<_>>())}
                </div>

                <div class="chatbot-preview">
                    {move || {
                        chat.with(|s| s.preview.clone())
                            .map(|preview| {
                                let background = preview
                                    .object_url
                                    .map(|url| format!("url({url})"))
                                    .unwrap_or_default();
                                view! {
                                    <div
                                        class="chatbot-preview-image"
                                        title=preview.file_name
                                        style:background-image=background
                                    >
                                        <div class="chatbot-preview-remove" on:click=on_remove_image>
                                            "×"
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="chatbot-input-row">
                    <button class="chatbot-attach" title="Attach image" on:click=on_attach>
                        "📎"
                    </button>
                    <input
                        class="chatbot-file"
                        type="file"
                        accept=accept
                        style="display: none"
                        node_ref=file_ref
                        on:change=on_file_change
                    />
                    <input
                        class="chatbot-input"
                        type="text"
                        placeholder="Type a message..."
                        node_ref=input_ref
                        prop:value=move || chat.with(|s| s.input.clone())
                        on:input=move |ev| chat.update(|s| s.input = event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary chatbot-send" on:click=on_send>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn entry_view(entry: &ChatEntry) -> AnyView {
    match entry {
        ChatEntry::Message(message) => message_view(message),
        ChatEntry::Typing(_) => view! {
            <div class="message bot-message typing-indicator">
                <div class="message-content">
                    <p>{TYPING_TEXT}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

fn message_view(message: &RenderedMessage) -> AnyView {
    let paragraphs = message
        .paragraphs
        .iter()
        .map(|paragraph| {
            let segments = paragraph.segments.iter().map(segment_view).collect::<Vec<_>>();
            view! { <p>{segments}</p> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=bubble_class(message)>
            <div class="message-content">{paragraphs}</div>
        </div>
    }
    .into_any()
}

fn segment_view(segment: &Segment) -> AnyView {
    match segment {
        Segment::Text(text) => text.clone().into_any(),
        Segment::Link(url) => view! {
            <a href=url.clone() target="_blank" rel="noopener noreferrer">
                {url.clone()}
            </a>
        }
        .into_any(),
    }
}

fn bubble_class(message: &RenderedMessage) -> String {
    format!("message {}-message", message.sender.as_str())
}
