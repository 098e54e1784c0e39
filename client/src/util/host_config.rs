//! Widget configuration supplied by the host page.
//!
//! The page may embed `<script type="application/json" id="chat-widget-config">`
//! with a partial `WidgetConfig`. Missing or malformed config falls back to
//! same-origin defaults; the widget must still mount.

#[cfg(test)]
#[path = "host_config_test.rs"]
mod host_config_test;

use chat_widget::WidgetConfig;

#[cfg(feature = "csr")]
const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

/// Read the host page's config element, or defaults.
pub fn read() -> WidgetConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        WidgetConfig::default()
    }
}

/// Parse embedded config text, logging and falling back on bad input.
pub fn parse(raw: Option<&str>) -> WidgetConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return WidgetConfig::default();
    };
    match WidgetConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring chat widget config: {e}");
            WidgetConfig::default()
        }
    }
}
