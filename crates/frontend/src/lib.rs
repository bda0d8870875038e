pub mod app;
pub mod dashboards;
pub mod shared;

use crate::shared::api_utils::ApiConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Backend origin is resolved once, before anything can issue a request.
    shared::api_utils::init_api_config(ApiConfig::from_window());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
