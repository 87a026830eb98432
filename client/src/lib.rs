//! # client
//!
//! Leptos + WASM browser dashboard for the vehicle fleet.
//!
//! The page fetches the fleet on mount, shows summary counts and a table,
//! and lets the user add a vehicle through a modal or change a row's status
//! through its selector. State transitions and the request/log policy come
//! from the `fleet` crate; this crate only renders and wires events.
//!
//! Build with `--features csr` (e.g. `trunk serve --features csr`) for the
//! browser. Without the feature the network layer is stubbed so the crate
//! compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;

/// WASM entry point: install the console logger and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
