//! # msdp-client
//!
//! Leptos + WASM dashboard for the MSDP disease-surveillance platform.
//! Role-gated screens for administrators, health officials, pharmacists,
//! and lab technicians: surveillance data upload, forecasting-model
//! training runs, forecast browsing, and report management.
//!
//! All domain logic lives on a separate backend reached over HTTP; this
//! crate contains pages, components, application state, and the network
//! layer (token storage, bearer auth with transparent refresh, typed
//! endpoint wrappers).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
