//! # client
//!
//! Leptos + WASM frontend for ObjectDetect: the router, navbar, the Home,
//! About and Detection pages, the detection view-state machine and the
//! browser adapters for files, the webcam and the inference endpoint.
//!
//! The crate is compiled twice: with `ssr` into the host for server
//! rendering, and with `hydrate` to WASM for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
