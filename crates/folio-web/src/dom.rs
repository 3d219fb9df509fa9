//! DOM plumbing shared by the controllers.

use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Errors raised while binding to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A required element id is not in the document.
    MissingElement(String),
    /// The element exists but is not the expected kind (input, form, ...).
    WrongElementType(String),
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element #{id}"),
            Self::WrongElementType(id) => write!(f, "element #{id} has the wrong type"),
            Self::Js(msg) => write!(f, "browser error: {msg}"),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Look up `id` and cast it to `T`.
pub fn require<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(id.to_string()))
}

/// Like [`require`], but absence (or a type mismatch) is `None`.
pub fn optional<T: JsCast>(document: &web_sys::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}
