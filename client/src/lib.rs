//! # client
//!
//! Leptos + WASM frontend for the employee administration app.
//!
//! Pages drive `roster` state machines and talk to the backend through
//! `roster::Gateway` with a same-origin browser transport; the server proxies
//! `/api` onward.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
