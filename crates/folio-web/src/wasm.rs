#![forbid(unsafe_code)]

use wasm_bindgen::prelude::*;

/// Module entry point, run by `wasm-bindgen` when the module is instantiated.
///
/// Installs the panic hook and hands off to the async boot sequence. Every
/// failure after this point is logged and confined to its component.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(crate::app::run());
}
