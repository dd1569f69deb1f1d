//! Quick-suggestion buttons that send a canned question.

use leptos::prelude::*;

use crate::i18n::{SuggestionTopic, lookup, suggestion_prompt};
use crate::state::locale::LocaleState;

/// Row of canned-question buttons.
///
/// Labels and question text follow the active language. Each click
/// dispatches exactly one send through `on_pick`.
#[component]
pub fn QuickSuggestions(on_pick: Callback<String>) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();

    view! {
        <div class="quick-suggestions">
            {SuggestionTopic::ALL
                .iter()
                .copied()
                .map(|topic| {
                    let label = move || lookup(topic.label_key(), locale.get().language);
                    let on_click = move |_| {
                        let language = locale.get_untracked().language;
                        on_pick.run(suggestion_prompt(topic, language).to_owned());
                    };
                    view! {
                        <button class="quick-suggestions__button" on:click=on_click>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
