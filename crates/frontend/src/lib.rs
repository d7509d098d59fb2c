pub mod app;
pub mod layout;
pub mod shared;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

/// Сценарии работают с готовой разметкой, поэтому ждём разбора документа
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(hydrate);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        hydrate();
    }
}
