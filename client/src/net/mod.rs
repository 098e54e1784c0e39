//! Networking for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the core `ChatApi` trait on top of `gloo-net`; wire
//! types and body decoding are shared with the core crate.

pub mod api;
