//! Theme toggle bound to `localStorage` and the root `data-theme` attribute.

use folio_core::theme::THEME_ATTRIBUTE;
use folio_core::{PreferenceStore, StorageError, ThemeController};
use web_sys::{Element, Storage, Window};

use crate::app::Site;
use crate::dom::{self, SiteError, js_message};

/// `window.localStorage`, if the browser grants it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %js_message(&err), "localStorage unavailable");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

/// Apply the saved theme and wire the toggle button.
pub fn init(site: &Site) -> Result<(), SiteError> {
    let root = site
        .document
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("documentElement".into()))?;
    let mut controller = ThemeController::new(
        LocalStorage::open(&site.window),
        site.config.theme_storage_key.clone(),
    );
    if let Some(theme) = controller.initial() {
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        tracing::debug!(%theme, "saved theme applied");
    }

    let button: Element = site.require(&site.config.ids.theme_toggle)?;
    dom::listen(&button, "click", move |_| {
        let current = root.get_attribute(THEME_ATTRIBUTE);
        let next = controller.toggle(current.as_deref());
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, next.as_str()) {
            tracing::warn!(error = %js_message(&err), "theme attribute not set");
        }
    })
}
