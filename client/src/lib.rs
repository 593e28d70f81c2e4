//! # pagbantay-client
//!
//! Leptos + WASM frontend for the Pagbantay volunteer-event application.
//!
//! This crate contains the routing shell, pages, components, application
//! state, and the REST / identity-provider network helpers. The root host
//! binary renders it on the server (`ssr`) and the browser hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    config::warn_on_defaults();
    leptos::mount::hydrate_body(app::App);
}
