// lib.rs - Root module for the pediatric_site library
//
// The library carries the whole site: pure widget state, the video feed
// pipeline, and the Leptos components that render them. The server binary
// and the WASM bundle both build from here.

/// The Leptos site (models, widget state, components, pages)
pub mod site;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrates the server-rendered markup
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(site::App);
        }
    }
}
