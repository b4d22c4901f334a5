//! # zenith-client
//!
//! Leptos + WASM frontend for the Zenith solar marketing site.
//!
//! This crate contains pages, components, the UI state machines behind them
//! (savings estimator, slider, accordion, carousel, contact form, nav), the
//! static site content, and the contact submission client. The server crate
//! renders `app::App` over SSR; the `hydrate` feature builds the WASM bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
