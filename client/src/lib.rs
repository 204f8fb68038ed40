//! # client
//!
//! Leptos frontend for redject. Renders the navigation shell around routed
//! pages and owns the browser-side auth store.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and the route table shared by the SSR server and the hydrated client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
