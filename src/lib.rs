//! # docqa
//!
//! Leptos + WASM frontend for a document question-answering service.
//!
//! Users upload documents, then ask questions answered from those documents,
//! the web, or both. Retrieval and generation live entirely in the backend;
//! this crate holds the pages, components, view state, and the REST client.
//! Build for the browser with the `csr` feature (e.g. `trunk serve`); host
//! builds compile the same state logic for unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic hook and logger, then mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("docqa starting: api={}", config::ApiConfig::from_build_env().base_url);
    leptos::mount::mount_to_body(app::App);
}
