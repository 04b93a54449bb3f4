//! # speciapi-web
//!
//! Leptos + WASM frontend for the Speciapi personality and depression
//! assessment service. This crate owns the login flow and the client-side
//! session: token decoding, the persisted `localStorage`/cookie mirror, the
//! in-memory session state and the service that talks to the auth API.
//!
//! Pure logic compiles and tests on the host; browser bindings are gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;

    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    log::info!("starting speciapi-web against {}", config.api_base_url);
    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
