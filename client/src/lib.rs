//! # client
//!
//! Leptos + WASM frontend for Cadenza, the AI music and video studio.
//!
//! This crate contains the route table, the access-control guards that wrap
//! every page, the pages and components themselves, session state, and the
//! REST client. The host server renders it with `ssr`; the browser hydrates
//! it with `hydrate`.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
