//! # chat-client
//!
//! Leptos + WASM frontend for the streaming chat application. Replaces the
//! vanilla-JS chat widget with a Rust-native UI layer.
//!
//! This crate contains the chat page, components, application state, wire
//! types, and the WebSocket event client. The server side of the protocol
//! (message routing and token streaming) lives elsewhere; this crate only
//! consumes it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
