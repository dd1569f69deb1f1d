use super::*;

// =============================================================
// Defaults and seeding
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn seeded_transcript_holds_one_greeting() {
    for lang in Language::ALL {
        let state = ChatState::seeded(lang);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, greeting(lang));
        assert_eq!(state.messages[0].origin, MessageOrigin::Assistant);
        assert!(!state.pending);
    }
}

// =============================================================
// Append
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ChatState::seeded(Language::En);
    state.push("What is today's weather?", MessageOrigin::User);
    state.push("Sunny, 30C", MessageOrigin::Assistant);

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].text, "What is today's weather?");
    assert_eq!(state.messages[1].origin, MessageOrigin::User);
    assert_eq!(state.messages[2].text, "Sunny, 30C");
    assert_eq!(state.messages[2].origin, MessageOrigin::Assistant);
}

#[test]
fn push_assigns_distinct_ids() {
    let mut state = ChatState::default();
    state.push("a", MessageOrigin::User);
    state.push("b", MessageOrigin::User);
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

// =============================================================
// Pending placeholder
// =============================================================

#[test]
fn pending_set_and_cleared() {
    let mut state = ChatState::seeded(Language::En);
    state.show_pending();
    assert!(state.pending);
    state.clear_pending();
    assert!(!state.pending);
}

#[test]
fn clear_pending_without_show_is_harmless() {
    let mut state = ChatState::default();
    state.clear_pending();
    assert!(!state.pending);
}

#[test]
fn show_pending_twice_is_still_one_placeholder() {
    let mut state = ChatState::default();
    state.show_pending();
    state.show_pending();
    assert!(state.pending);
    state.clear_pending();
    assert!(!state.pending);
}

// =============================================================
// Send lifecycle
// =============================================================

#[test]
fn successful_ask_lifecycle_leaves_paired_turns_and_no_pending() {
    let mut state = ChatState::seeded(Language::En);

    // Dispatch: user turn appended, placeholder shown.
    state.push("What is today's weather?", MessageOrigin::User);
    state.show_pending();

    // Settle: placeholder cleared before the reply is appended.
    state.clear_pending();
    state.push("Sunny, 30C", MessageOrigin::Assistant);

    let last_two: Vec<_> = state.messages.iter().rev().take(2).collect();
    assert_eq!(last_two[1].text, "What is today's weather?");
    assert_eq!(last_two[1].origin, MessageOrigin::User);
    assert_eq!(last_two[0].text, "Sunny, 30C");
    assert_eq!(last_two[0].origin, MessageOrigin::Assistant);
    assert!(!state.pending);
}

#[test]
fn failed_ask_lifecycle_appends_error_message_and_no_pending() {
    let mut state = ChatState::seeded(Language::En);
    state.push("question", MessageOrigin::User);
    state.show_pending();

    state.clear_pending();
    state.push(
        "Sorry, I encountered an error: model unavailable",
        MessageOrigin::Assistant,
    );

    assert!(!state.pending);
    let last = state.messages.last().expect("message");
    assert!(last.text.starts_with("Sorry, I encountered an error:"));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_leaves_exactly_one_greeting() {
    let mut state = ChatState::seeded(Language::En);
    state.push("question", MessageOrigin::User);
    state.push("answer", MessageOrigin::Assistant);

    state.reset(Language::Hi);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, greeting(Language::Hi));
    assert_eq!(state.messages[0].origin, MessageOrigin::Assistant);
}

// =============================================================
// Greeting relocalization
// =============================================================

#[test]
fn relocalize_rewrites_untouched_greeting() {
    let mut state = ChatState::seeded(Language::En);
    state.relocalize_greeting(Language::Hi);
    assert_eq!(state.messages[0].text, greeting(Language::Hi));
}

#[test]
fn relocalize_is_idempotent() {
    let mut state = ChatState::seeded(Language::En);
    state.relocalize_greeting(Language::Ta);
    let after_first = state.messages.clone();
    state.relocalize_greeting(Language::Ta);
    assert_eq!(state.messages, after_first);
}

#[test]
fn relocalize_skips_touched_transcript() {
    let mut state = ChatState::seeded(Language::En);
    state.push("my crop has yellow leaves", MessageOrigin::User);

    state.relocalize_greeting(Language::Bn);
    assert_eq!(state.messages[0].text, greeting(Language::En));
    assert_eq!(state.messages[1].text, "my crop has yellow leaves");
}

#[test]
fn relocalize_skips_non_greeting_single_message() {
    let mut state = ChatState::default();
    state.push("leftover assistant text", MessageOrigin::Assistant);

    state.relocalize_greeting(Language::Te);
    assert_eq!(state.messages[0].text, "leftover assistant text");
}

#[test]
fn relocalize_on_empty_transcript_is_noop() {
    let mut state = ChatState::default();
    state.relocalize_greeting(Language::Hi);
    assert!(state.messages.is_empty());
}

#[test]
fn relocalize_chain_across_languages_tracks_latest() {
    let mut state = ChatState::seeded(Language::En);
    state.relocalize_greeting(Language::Hi);
    state.relocalize_greeting(Language::Te);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, greeting(Language::Te));
}
