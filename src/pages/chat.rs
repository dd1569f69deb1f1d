//! Chat page: header, welcome banner, transcript, input row, footer.

use leptos::prelude::*;

use crate::components::language_picker::LanguagePicker;
use crate::components::quick_suggestions::QuickSuggestions;
use crate::components::transcript::Transcript;
use crate::i18n::{TextKey, lookup};
use crate::net::api;
use crate::state::chat::{ChatState, MessageOrigin};
use crate::state::locale::LocaleState;
use crate::state::session::SessionState;

/// Chat view shown while a session is active.
///
/// Every localized surface is a closure over the locale signal, so a
/// language change re-applies the whole catalog in one pass.
#[component]
pub fn ChatPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());

    let text = move |key: TextKey| move || lookup(key, locale.get().language);

    // Shared send routine for the input row and the quick suggestions.
    // Overlapping asks are not de-duplicated; each one settles on its own
    // and clears the pending row on every exit path.
    let send = move |raw: String| {
        let message = raw.trim().to_owned();
        if message.is_empty() {
            return;
        }

        chat.update(|c| {
            c.push(message.clone(), MessageOrigin::User);
            c.show_pending();
        });

        let language = locale.get_untracked().language;
        leptos::task::spawn_local(async move {
            let result = api::ask(&message, language).await;
            chat.update(|c| c.clear_pending());
            match result {
                Ok(response) => {
                    chat.update(|c| c.push(response, MessageOrigin::Assistant));
                }
                Err(e) => {
                    chat.update(|c| {
                        c.push(
                            format!("Sorry, I encountered an error: {e}"),
                            MessageOrigin::Assistant,
                        );
                    });
                }
            }
        });
    };

    let send_from_input = move || {
        let message = input.get();
        input.set(String::new());
        send(message);
    };

    let on_send_click = move |_| send_from_input();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_from_input();
        }
    };

    let on_clear = move |_| {
        let language = locale.get_untracked().language;
        chat.update(|c| c.reset(language));
    };

    // Logout is best-effort: the view flips back even if the request fails.
    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            api::logout().await;
            session.update(|s| s.logged_in = false);
        });
    };

    let on_pick = Callback::new(move |prompt: String| send(prompt));

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <div class="chat-page__heading">
                    <h1 class="chat-page__title">{text(TextKey::HeaderTitle)}</h1>
                    <p class="chat-page__subtitle">{text(TextKey::HeaderSubtitle)}</p>
                </div>
                <div class="chat-page__controls">
                    <LanguagePicker/>
                    <button class="btn chat-page__logout" on:click=on_logout>
                        {text(TextKey::LogoutLabel)}
                    </button>
                </div>
            </header>

            <section class="chat-page__banner">
                <p class="chat-page__welcome">{text(TextKey::WelcomeBanner)}</p>
                <div class="chat-page__tags">
                    <span class="chat-page__tag">{text(TextKey::TagCrop)}</span>
                    <span class="chat-page__tag">{text(TextKey::TagWeather)}</span>
                    <span class="chat-page__tag">{text(TextKey::TagPest)}</span>
                </div>
            </section>

            <Transcript/>

            <footer class="chat-page__footer">
                <div class="chat-page__input-row">
                    <input
                        class="chat-page__input"
                        type="text"
                        placeholder=text(TextKey::InputPlaceholder)
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary chat-page__send" on:click=on_send_click>
                        "Send"
                    </button>
                    <button class="btn chat-page__clear" on:click=on_clear>
                        "Clear"
                    </button>
                </div>

                <QuickSuggestions on_pick=on_pick/>

                <p class="chat-page__notice">{text(TextKey::FooterNotice)}</p>
            </footer>
        </div>
    }
}
