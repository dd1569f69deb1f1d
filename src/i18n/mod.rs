//! String catalog for the five supported UI languages.
//!
//! DESIGN
//! ======
//! Every visible string is keyed by `TextKey` and resolved against the
//! active `Language` through exhaustive matches, so a missing translation
//! is a compile error rather than a runtime fallback.

pub mod catalog;

pub use catalog::{Language, SuggestionTopic, TextKey, greeting, lookup, suggestion_prompt};
