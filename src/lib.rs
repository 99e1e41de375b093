// lib.rs - Root module for the rk_storefront library
//
// The storefront is a client-side rendered Leptos application compiled
// to WebAssembly. Everything lives under `web_app`; the `start` entry
// point below is invoked by the generated JS glue once the module loads.

pub mod web_app;

/// WASM entry point called by the generated JS glue code.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(web_app::App);
}
