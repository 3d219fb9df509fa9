//! Mobile navigation drawer.

use std::rc::Rc;

use folio_core::NavState;
use folio_core::nav::{NAV_OPEN_CLASS, is_close_key};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::app::Site;
use crate::dom::{self, SiteError};

const ARIA_EXPANDED: &str = "aria-expanded";

#[derive(Clone)]
struct Drawer {
    toggle: Element,
    panel: HtmlElement,
    body: Option<HtmlElement>,
}

impl Drawer {
    fn state(&self) -> NavState {
        NavState::from_aria_expanded(self.toggle.get_attribute(ARIA_EXPANDED).as_deref())
    }

    fn set(&self, state: NavState) {
        if let Err(err) = self.apply(state) {
            tracing::warn!(error = %err, ?state, "nav state not applied");
        }
    }

    fn apply(&self, state: NavState) -> Result<(), SiteError> {
        let attrs = state.attributes();
        self.toggle.set_attribute(ARIA_EXPANDED, attrs.aria_expanded)?;
        self.panel.dataset().set("collapsed", attrs.collapsed)?;
        if let Some(body) = &self.body {
            let classes = body.class_list();
            if attrs.body_open_class {
                classes.add_1(NAV_OPEN_CLASS)?;
            } else {
                classes.remove_1(NAV_OPEN_CLASS)?;
            }
        }
        Ok(())
    }
}

/// Wire the drawer. Pages without a toggle or panel get no drawer.
pub fn attach(site: &Rc<Site>) -> Result<(), SiteError> {
    let ids = &site.config.ids;
    let (Some(toggle), Some(panel)) = (
        site.optional::<Element>(&ids.nav_toggle),
        site.optional::<HtmlElement>(&ids.nav_panel),
    ) else {
        tracing::debug!("no mobile nav on this page");
        return Ok(());
    };
    let drawer = Drawer {
        toggle,
        panel,
        body: site.document.body(),
    };

    {
        let toggle = drawer.toggle.clone();
        let drawer = drawer.clone();
        dom::listen(&toggle, "click", move |_| drawer.set(drawer.state().toggled()))?;
    }

    let links = drawer.panel.query_selector_all("a,button")?;
    for idx in 0..links.length() {
        let Some(node) = links.get(idx) else {
            continue;
        };
        let drawer = drawer.clone();
        dom::listen(&node, "click", move |_| drawer.set(NavState::Closed))?;
    }

    dom::listen(&site.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if is_close_key(&key) {
            drawer.set(NavState::Closed);
        }
    })?;
    Ok(())
}
