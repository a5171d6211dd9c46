//! # dulce-storefront
//!
//! Leptos + WASM client for the Dulce Tentación storefront. The server renders
//! the product pages; this crate binds to that markup in the browser and owns
//! the client-side behavior: the `localStorage` cart, quantity steppers,
//! add-to-cart toasts, the admin product-edit modal, and the form
//! double-submit guard.
//!
//! Everything outside `controller` and `components` is target-independent and
//! unit-tested natively. Browser glue compiles only with the `hydrate` feature.

pub mod components;
pub mod config;
pub mod controller;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then bind the rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    controller::install();
}
