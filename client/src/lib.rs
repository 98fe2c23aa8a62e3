//! # client
//!
//! Leptos + WASM frontend for the dashboard.
//!
//! The crate resolves the visitor's session from browser storage once per tab,
//! publishes it through context, and gates restricted routes on the resolved
//! role. Storage content is client-writable, so the role decides presentation
//! only; the server remains the authority for anything it serves.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
