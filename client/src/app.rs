//! Root component and context providers.

use chat_widget::WidgetConfig;
use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::state::chat::ChatState;

/// Root component. Provides the chat state and widget config to children.
#[component]
pub fn App(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());

    provide_context(chat);
    provide_context(config.unwrap_or_else(crate::util::host_config::read));

    view! { <ChatWidget/> }
}
