//! Vestibule client — session-gated Leptos app shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client owns the session-state container, the gated entry navigation,
//! and the two unauthenticated screens. Token issuance and verification live
//! with the external identity provider; this crate only holds the resulting
//! session and routes accordingly.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
