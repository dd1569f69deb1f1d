//! Top-level views: exactly one renders at a time, keyed off session state.

pub mod chat;
pub mod login;
