//! # client
//!
//! Leptos + WASM front-end for Demo ATS: a listing page with a source filter
//! and a form for adding professionals.
//!
//! Flow logic lives in the `ats` crate; this crate owns the view layer, the
//! browser HTTP adapter, and the alert-based notifier.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
