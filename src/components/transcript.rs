//! Transcript view: message rows, the pending placeholder, auto-scroll.

use leptos::prelude::*;

use crate::state::chat::{ChatState, MessageOrigin};

/// Scrollable message list.
///
/// Renders one row per transcript message plus, while a request is
/// outstanding, a single "Thinking..." row styled like an assistant turn.
#[component]
pub fn Transcript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view whenever the transcript grows or the
    // pending row toggles.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.messages.len(), state.pending);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="transcript" node_ref=messages_ref>
            <For
                each=move || chat.get().messages
                key=|msg| msg.id.clone()
                children=|msg| {
                    let is_user = msg.origin == MessageOrigin::User;
                    view! {
                        <div
                            class="message"
                            class:message--user=is_user
                            class:message--bot=!is_user
                        >
                            <p>{msg.text}</p>
                        </div>
                    }
                }
            />
            {move || {
                chat.get().pending.then(|| {
                    view! {
                        <div class="message message--bot message--pending">
                            <p>"Thinking..."</p>
                        </div>
                    }
                })
            }}
        </div>
    }
}
