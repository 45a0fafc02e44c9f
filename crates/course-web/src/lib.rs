pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod copy_code;
pub mod pages;

/// Client entry point: hydrate the server-rendered page, then wire the
/// click-to-copy handlers onto the code blocks that are now live.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let bound = copy_code::bind_code_blocks(&document);
        web_sys::console::debug_1(&format!("[copy] bound {} code blocks", bound).into());
    }
}
