//! HTTP helpers for the backend auth and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning logged-out/error values since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get [`ApiError`] instead of panics. `Server` carries the
//! backend's `error` field verbatim for display; `Network` covers transport
//! failures and unparseable bodies, which callers replace with a generic
//! localized-or-static message. `check_login` and `logout` swallow failures
//! entirely: a failed probe means logged out, a failed logout still returns
//! the user to the login view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{AskRequest, AskResponse, CheckLoginResponse, LoginRequest};
use crate::i18n::Language;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Application error reported by the backend.
    #[error("{0}")]
    Server(String),
    /// Transport failure or unparseable response.
    #[error("{0}")]
    Network(String),
}

/// Classify a non-2xx response body.
///
/// A JSON `{error}` body is a server-reported error surfaced verbatim;
/// anything else counts as a transport-level failure.
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => ApiError::Server(b.error),
        Err(_) => ApiError::Network(format!("request failed with status {status}")),
    }
}

/// Probe the current session via `GET /check-login`.
///
/// Fails closed: any transport or parse failure reads as logged out.
pub async fn check_login() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/check-login").send().await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("check-login request failed: {e}");
                return false;
            }
        };
        match resp.json::<CheckLoginResponse>().await {
            Ok(body) => body.logged_in,
            Err(e) => {
                log::warn!("check-login body unreadable: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Authenticate via `POST /login`.
///
/// # Errors
///
/// `ApiError::Server` with the backend's message on rejected credentials,
/// `ApiError::Network` when the request never completed.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// End the session via `POST /logout`. Best-effort: failures are logged
/// and the caller returns to the login view regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Send a question via `POST /ask` and return the assistant's reply.
///
/// # Errors
///
/// `ApiError::Server` with the backend's message, or `ApiError::Network`
/// for transport/parse failures. Callers append either as an
/// error-prefixed transcript message, never dropping it.
pub async fn ask(message: &str, language: Language) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/ask")
            .json(&AskRequest {
                message,
                language: language.code(),
            })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            let body: AskResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            return Ok(body.response);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, language);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
