#![forbid(unsafe_code)]

//! WASM frontend for the folio portfolio site.
//!
//! This crate is intentionally host-specific (web/WASM). It binds the
//! host-agnostic logic in `folio-core` to the page:
//! - the DOM (cards, theme attribute, nav drawer, status lines),
//! - `fetch` (project list, contact form),
//! - `localStorage` (theme preference),
//! - timers (search debounce) and the browser console (`tracing` output).
//!
//! The module starts itself on instantiation. Load it as a module script (or
//! any deferred script) so the document is parsed before it runs:
//!
//! ```html
//! <script type="module">
//!   import init from "./pkg/folio_web.js";
//!   init();
//! </script>
//! ```

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod filter;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod projects;
#[cfg(target_arch = "wasm32")]
mod theme;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn start() {}
