//! Root application component with context providers and the view toggle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::{chat::ChatState, locale::LocaleState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, runs the one-shot startup session probe,
/// and renders exactly one of the login and chat views at any time.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let locale = RwSignal::new(LocaleState::default());
    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::seeded(locale.get_untracked().language));

    provide_context(locale);
    provide_context(session);
    provide_context(chat);

    // One-shot startup probe: the effect tracks nothing, so it fires once
    // after mount. Any failure leaves the logged-out default, so the login
    // view is the fail-closed answer.
    Effect::new(move || {
        session.update(SessionState::begin_check);
        leptos::task::spawn_local(async move {
            let logged_in = crate::net::api::check_login().await;
            session.update(|s| s.finish_check(logged_in));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/kisan-mitra.css"/>
        <Title text="Kisan Mitra"/>

        {move || {
            if session.get().logged_in {
                view! { <ChatPage/> }.into_any()
            } else {
                view! { <LoginPage/> }.into_any()
            }
        }}
    }
}
