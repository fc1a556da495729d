//! # inventory-shell
//!
//! Leptos + WASM application shell for the inventory tool.
//!
//! The shell owns session-gated navigation: the persisted access token, the
//! HTTP client that carries it, and the route gate that decides on every
//! navigation whether to proceed, send the user to `login`, or send a signed-in
//! user away from `login` to `home`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
