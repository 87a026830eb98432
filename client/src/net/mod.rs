//! Networking for the browser dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `fleet::VehicleApi` over `gloo-net` so the page can run
//! the shared fetch/create/update flows from the browser.

pub mod api;
