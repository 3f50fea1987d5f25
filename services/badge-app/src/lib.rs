//! Status badge components for Leptos front ends
//!
//! Shares the class mapping with the `status-badge` crate so server-rendered
//! and reactive badges look the same.

pub mod app;
pub mod components;

pub use app::App;
pub use components::status_badge::StatusBadge;

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
