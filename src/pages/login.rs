//! Login page gating access to the chat view.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::state::session::SessionState;

/// Login form with an inline error area.
///
/// A rejected login shows the backend's error text verbatim; a transport
/// failure shows a generic message instead. Success flips the session
/// state, which swaps this view for the chat page. While the startup
/// session probe is still in flight the submit is held, since its result
/// may swap the view on its own.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let do_login = move || {
        let email_value = email.get().trim().to_owned();
        let password_value = password.get().trim().to_owned();

        if email_value.is_empty() || password_value.is_empty() {
            error.set("Please enter both email and password.".to_owned());
            return;
        }

        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(()) => {
                    error.set(String::new());
                    session.update(|s| s.logged_in = true);
                }
                Err(ApiError::Server(msg)) => error.set(msg),
                Err(ApiError::Network(_)) => {
                    error.set("An error occurred during login.".to_owned());
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_login();
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__title">"🌾 Kisan Mitra"</h1>
            <p class="login-page__tagline">"Your AI farming companion"</p>

            <form class="login-page__form" on:submit=on_submit>
                <input
                    class="login-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary login-page__submit"
                    type="submit"
                    disabled=move || session.get().checking
                >
                    "Sign in"
                </button>
            </form>

            <div class="login-page__error">{move || error.get()}</div>
        </div>
    }
}
