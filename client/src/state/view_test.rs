#![cfg(not(feature = "csr"))]

use chat_widget::Sender;
use chat_widget::message::render;

use super::*;
use crate::state::chat::ChatEntry;

fn view() -> (SignalView, RwSignal<ChatState>) {
    let state = RwSignal::new(ChatState::default());
    (SignalView::new(state), state)
}

#[test]
fn open_and_focus_update_state() {
    let (view, state) = view();
    view.set_open(true);
    view.focus_input();
    let s = state.get_untracked();
    assert!(s.open);
    assert_eq!(s.focus_seq, 1);
}

#[test]
fn clear_input_empties_text_field() {
    let (view, state) = view();
    state.update(|s| s.input = "draft".into());
    view.clear_input();
    assert!(state.get_untracked().input.is_empty());
}

#[test]
fn typing_placeholder_sits_between_messages() {
    let (view, state) = view();
    let id = TypingId::new();
    view.append_message(&render("hi", Sender::User).unwrap());
    view.show_typing(id);
    assert_eq!(state.get_untracked().typing_count(), 1);

    view.remove_typing(id);
    view.append_message(&render("hello", Sender::Bot).unwrap());
    let entries = state.get_untracked().entries;
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| matches!(e, ChatEntry::Message(_))));
}

#[test]
fn preview_show_and_clear() {
    let (view, state) = view();
    view.show_preview(Preview { file_name: "a.png".into(), object_url: None });
    assert_eq!(state.get_untracked().preview.map(|p| p.file_name), Some("a.png".to_owned()));
    view.clear_preview();
    assert!(state.get_untracked().preview.is_none());
}
