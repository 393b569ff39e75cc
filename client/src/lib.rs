//! # client
//!
//! Leptos + WASM frontend for the quiz application.
//!
//! This crate owns the route table, the root `App` component that mounts the
//! browser-history router, the navigation bar, and the page units each route
//! renders. The `quiz` host crate renders it on the server (`ssr`), and the
//! browser hydrates it through [`hydrate`] (`hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

/// WASM entry point: hydrate the server-rendered `App` in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
