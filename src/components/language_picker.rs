//! Language selector dispatching locale changes.

use leptos::prelude::*;

use crate::i18n::Language;
use crate::state::chat::ChatState;
use crate::state::locale::LocaleState;

/// `<select>` over the supported languages, labeled in native script.
///
/// A change sets the active language and rewrites the seeded greeting if
/// the transcript is still untouched; every other text surface follows the
/// locale signal on its own.
#[component]
pub fn LanguagePicker() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let Some(language) = Language::from_code(&event_target_value(&ev)) else {
            return;
        };
        locale.update(|l| l.language = language);
        chat.update(|c| c.relocalize_greeting(language));
    };

    view! {
        <select
            class="language-picker"
            prop:value=move || locale.get().language.code()
            on:change=on_change
        >
            {Language::ALL
                .iter()
                .map(|lang| {
                    view! { <option value=lang.code()>{lang.native_name()}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
