//! # kisan-mitra-client
//!
//! Leptos + WASM frontend for the Kisan Mitra agricultural assistant.
//! Replaces the hand-rolled JavaScript chat widget with a Rust-native UI
//! layer.
//!
//! This crate contains pages, components, application state, the string
//! catalog for the five supported languages (English, Hindi, Tamil, Telugu,
//! Bengali), and the HTTP client for the backend auth and chat endpoints.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point — hydrates the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
