use super::*;

#[test]
fn endpoints_follow_config() {
    let api = GlooChatApi::new(&WidgetConfig::default());
    assert_eq!(api.upload_url(), "/upload-chat-image");
    assert_eq!(api.chat_url(), "/chatbot");

    let api = GlooChatApi::new(&WidgetConfig::with_base_url("https://ads.example.test/"));
    assert_eq!(api.chat_url(), "https://ads.example.test/chatbot");
}

#[test]
fn size_from_js_truncates_and_clamps() {
    assert_eq!(size_from_js(5_242_880.0), 5_242_880);
    assert_eq!(size_from_js(10.9), 10);
    assert_eq!(size_from_js(-1.0), 0);
    assert_eq!(size_from_js(f64::NAN), 0);
    assert_eq!(size_from_js(f64::INFINITY), 0);
}

#[test]
fn accept_attribute_lists_allowed_types() {
    assert_eq!(accept_attribute(&WidgetConfig::default()), "image/jpeg,image/png,image/jpg");
}
