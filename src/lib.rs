#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod reveal;
pub mod schedule;
pub mod scroll_lock;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);

    leptos::mount::hydrate_body(App);
}
