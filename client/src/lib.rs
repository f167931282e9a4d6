//! # client
//!
//! Leptos + WASM frontend for the PokéDex card collection.
//!
//! This crate contains pages, components, application state, and browser
//! helpers. The root crate renders it on the server (`ssr`) and the browser
//! bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
