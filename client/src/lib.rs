//! # asopadel-client
//!
//! Leptos + WASM frontend for the ASOPADEL Barinas association site.
//!
//! This crate contains pages, components, session/auth state, REST types,
//! and the route guard. It talks to the association REST API directly and is
//! rendered on the server by the `asopadel` host binary.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
