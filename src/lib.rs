//! # medisync-console
//!
//! Leptos + WASM frontend for the MediSync hospital-records backend.
//! Renders patient/doctor/appointment lists and forms and gates protected
//! routes behind a bearer-token session check.
//!
//! This crate contains pages, components, shared state, the REST client,
//! and the session/route-guard core. The REST backend itself lives in a
//! separate service and is reached via `config::api_base()`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// Browser entry point: hydrate the app into the existing DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
