//! Reusable view components for the chat page.

pub mod language_picker;
pub mod quick_suggestions;
pub mod transcript;
