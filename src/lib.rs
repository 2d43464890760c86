//! # resume-client
//!
//! Leptos + WASM frontend for the AI resume analysis service.
//!
//! The crate centers on the client session: restoring a persisted bearer
//! token at startup, gating protected routes until that restore completes,
//! stamping the token on every request through a shared gateway, and forcing
//! a clean sign-out when the service rejects it. Pages for login,
//! registration and the dashboard sit on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install browser logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
