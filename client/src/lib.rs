//! # client
//!
//! Leptos + WASM frontend for the Primer tutorial site.
//!
//! The crate holds the router shell, the presentational components, the four
//! tutorial pages, their page-local state types, and the small amount of
//! browser glue (theme storage, document title, mock API). Browser-only code
//! sits behind the `hydrate` feature and compiles to no-ops for SSR and native
//! tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
