//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates page/environment lookups from components so they stay testable
//! in native builds.

pub mod host_config;
