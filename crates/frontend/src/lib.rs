pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the storefront page into `<body>`.
#[wasm_bindgen]
pub fn mount() {
    // Browser console backend for the `log` macros
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
