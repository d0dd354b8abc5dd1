pub mod ambient;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod locale;
pub mod prefs;
pub mod progress;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // only fails if a logger is already set
    _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
