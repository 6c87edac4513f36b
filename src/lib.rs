// lib.rs - Root module for the storefront library
//
// The server binary and the WASM client share this crate. `fixtures` holds
// the bundled catalog and demo cart; `web_app` holds everything else.

/// Seed data compiled into the binary
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use leptos::prelude::*;
        use wasm_bindgen::prelude::wasm_bindgen;

        use web_app::App;

        /// Client entry point, called by the generated JS once the WASM loads
        ///
        /// Installs the server's config and catalog from the page before
        /// mounting, so hydration renders the same data the server did.
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            let store_config = web_app::bootstrap::install_from_document();
            leptos::mount::hydrate_body(move || {
                provide_context(store_config);
                view! { <App /> }
            });
        }
    }
}
