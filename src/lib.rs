//! Vendoo - storefront front-end
//!
//! Marketing site, seller onboarding and dashboard, and public shop pages,
//! built with Leptos and WebAssembly. All business data lives behind the
//! Vendoo HTTP API; this crate keeps the session in browser storage and
//! decides which part of the site each visitor may see.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
