use chat_widget::Sender;
use chat_widget::message::render;

use super::*;

fn bot(text: &str) -> RenderedMessage {
    render(text, Sender::Bot).unwrap()
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_closed_and_empty() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(state.entries.is_empty());
    assert!(state.preview.is_none());
    assert!(state.input.is_empty());
    assert_eq!(state.focus_seq, 0);
}

// =============================================================
// Typing placeholders
// =============================================================

#[test]
fn remove_typing_only_removes_matching_placeholder() {
    let mut state = ChatState::default();
    let first = TypingId::new();
    let second = TypingId::new();
    state.add_typing(first);
    state.push_message(bot("between"));
    state.add_typing(second);

    state.remove_typing(second);
    assert_eq!(state.entries, vec![ChatEntry::Typing(first), ChatEntry::Message(bot("between"))]);
    assert_eq!(state.typing_count(), 1);

    state.remove_typing(first);
    assert_eq!(state.typing_count(), 0);
}

#[test]
fn remove_unknown_typing_is_noop() {
    let mut state = ChatState::default();
    state.push_message(bot("hi"));
    state.remove_typing(TypingId::new());
    assert_eq!(state.entries.len(), 1);
}

// =============================================================
// Preview
// =============================================================

#[test]
fn set_preview_returns_replaced_preview() {
    let mut state = ChatState::default();
    let a = Preview { file_name: "a.png".into(), object_url: Some("blob:a".into()) };
    let b = Preview { file_name: "b.png".into(), object_url: Some("blob:b".into()) };

    assert_eq!(state.set_preview(a.clone()), None);
    assert_eq!(state.set_preview(b.clone()), Some(a));
    assert_eq!(state.take_preview(), Some(b));
    assert_eq!(state.take_preview(), None);
}

#[test]
fn request_focus_bumps_sequence() {
    let mut state = ChatState::default();
    state.request_focus();
    state.request_focus();
    assert_eq!(state.focus_seq, 2);
}
