//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `chat` is the plain reactive model; `view` adapts it to the core
//! `ChatView` trait so the controller never touches Leptos types.

pub mod chat;
pub mod view;
