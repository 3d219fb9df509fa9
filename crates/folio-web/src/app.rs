//! Boot sequence and shared page context.

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::CONFIG_ELEMENT_ID;
use folio_core::{Messages, ProjectStore, SiteConfig};
use tracing::{error, info, warn};
use web_sys::{Document, HtmlElement, Window};
use web_time::Instant;

use crate::dom::{self, SiteError};
use crate::projects::ProjectView;
use crate::{contact, filter, logging, nav, projects, theme};

/// Page-wide context handed to every controller.
pub struct Site {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    pub messages: &'static Messages,
    /// Written once by the loader, read by the filter.
    pub store: RefCell<ProjectStore>,
    origin: Instant,
}

impl Site {
    fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        Self {
            window,
            document,
            messages: config.messages(),
            config,
            store: RefCell::new(ProjectStore::new()),
            origin: Instant::now(),
        }
    }

    /// Monotonic time since boot.
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    pub fn require<T: wasm_bindgen::JsCast>(&self, id: &str) -> Result<T, SiteError> {
        dom::require(&self.document, id)
    }

    pub fn optional<T: wasm_bindgen::JsCast>(&self, id: &str) -> Option<T> {
        dom::optional(&self.document, id)
    }
}

/// Run the page: year, theme, load + first render, then the listeners.
pub async fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config_text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = config_text
        .as_deref()
        .map(SiteConfig::from_json_str)
        .transpose();
    let config = match config {
        Ok(config) => {
            let config = config.unwrap_or_default();
            logging::init(config.max_level());
            config
        }
        Err(err) => {
            logging::init(tracing::Level::INFO);
            warn!(error = %err, "using default site configuration");
            SiteConfig::default()
        }
    };
    info!(locale = ?config.locale, resource = %config.resource, "site starting");

    let site = Rc::new(Site::new(window, document, config));

    stamp_year(&site);
    report("theme", theme::init(&site));

    match ProjectView::bind(&site) {
        Ok(view) => {
            let view = Rc::new(view);
            projects::load(&site, &view).await;
            report("filter", filter::attach(&site, &view));
        }
        Err(err) => report("projects", Err::<(), _>(err)),
    }

    report("nav", nav::attach(&site));
    report("contact", contact::attach(&site));
}

fn report(component: &'static str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        error!(component, error = %err, "component not initialized");
    }
}

fn stamp_year(site: &Site) {
    match site.optional::<HtmlElement>(&site.config.ids.year) {
        Some(el) => {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
        None => warn!(id = %site.config.ids.year, "year element not found"),
    }
}
