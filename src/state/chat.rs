#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::i18n::{Language, greeting};

/// State for the chat transcript.
///
/// Messages are append-only; the whole sequence is replaced only by
/// [`ChatState::reset`]. `pending` models the single "Thinking..."
/// placeholder: it is a flag rather than a transcript entry, so more than
/// one placeholder cannot exist.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

/// A single transcript message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub origin: MessageOrigin,
}

/// Who produced a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageOrigin {
    User,
    Assistant,
}

impl ChatMessage {
    fn new(text: impl Into<String>, origin: MessageOrigin) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            origin,
        }
    }
}

impl ChatState {
    /// A fresh transcript holding the greeting for `language`.
    pub fn seeded(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::new(greeting(language), MessageOrigin::Assistant)],
            pending: false,
        }
    }

    /// Append a message to the transcript.
    pub fn push(&mut self, text: impl Into<String>, origin: MessageOrigin) {
        self.messages.push(ChatMessage::new(text, origin));
    }

    /// Show the awaiting-response placeholder.
    pub fn show_pending(&mut self) {
        self.pending = true;
    }

    /// Remove the placeholder. Called on every exit path of a request,
    /// whether it succeeded or failed.
    pub fn clear_pending(&mut self) {
        self.pending = false;
    }

    /// Clear the transcript and reseed a single greeting in `language`.
    pub fn reset(&mut self, language: Language) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::new(greeting(language), MessageOrigin::Assistant));
    }

    /// Rewrite the seeded greeting for a newly selected language.
    ///
    /// Only fires while the transcript is untouched: exactly one assistant
    /// message whose text is the greeting of some supported language. Once
    /// the user has sent anything the transcript is left alone. Idempotent.
    pub fn relocalize_greeting(&mut self, language: Language) {
        if self.messages.len() != 1 {
            return;
        }
        let Some(first) = self.messages.first_mut() else {
            return;
        };
        if first.origin != MessageOrigin::Assistant {
            return;
        }
        if Language::ALL.iter().any(|l| greeting(*l) == first.text) {
            first.text = greeting(language).to_owned();
        }
    }
}
