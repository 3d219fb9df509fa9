//! Project grid: one-shot load and full-replace rendering.

use folio_core::loader::{self, LoadError};
use folio_core::render::{CARD_CLASS, CARD_TAG};
use folio_core::{ProjectRecord, RenderOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Request, RequestCache, RequestInit, Response, Url, Window};

use crate::app::Site;
use crate::dom::{SiteError, js_message};

/// The grid and its two sibling regions.
pub struct ProjectView {
    document: Document,
    grid: Element,
    empty_state: HtmlElement,
    load_error: HtmlElement,
}

impl ProjectView {
    pub fn bind(site: &Site) -> Result<Self, SiteError> {
        let ids = &site.config.ids;
        Ok(Self {
            document: site.document.clone(),
            grid: site.require(&ids.projects)?,
            empty_state: site.require(&ids.empty_state)?,
            load_error: site.require(&ids.load_error)?,
        })
    }

    /// Replace every card with `outcome`.
    pub fn render(&self, outcome: &RenderOutcome) -> Result<(), SiteError> {
        self.grid.set_inner_html("");
        if outcome.show_empty_state() {
            self.empty_state.set_hidden(false);
            return Ok(());
        }
        self.empty_state.set_hidden(true);

        let fragment = self.document.create_document_fragment();
        for card in &outcome.cards {
            let article = self.document.create_element(CARD_TAG)?;
            article.set_class_name(CARD_CLASS);
            article.set_inner_html(&card.inner_html);
            fragment.append_child(&article)?;
        }
        self.grid.append_child(&fragment)?;
        Ok(())
    }

    fn show_error(&self, text: &str) {
        self.load_error.set_hidden(false);
        self.load_error.set_text_content(Some(text));
    }
}

/// Fetch the project list once, fill the store and render everything.
pub async fn load(site: &Site, view: &ProjectView) {
    let result = fetch_projects(&site.window, &site.config.resource).await;
    let loaded = loader::finish_load(&mut site.store.borrow_mut(), result, site.messages);
    match loaded {
        Ok(_) => {
            let store = site.store.borrow();
            let outcome = folio_core::render_projects(store.projects(), site.messages);
            if let Err(err) = view.render(&outcome) {
                tracing::error!(error = %err, "initial render failed");
            }
        }
        Err(text) => view.show_error(&text),
    }
}

async fn fetch_projects(window: &Window, resource: &str) -> Result<Vec<ProjectRecord>, LoadError> {
    let base = window.location().href().map_err(transport)?;
    let url = Url::new_with_base(resource, &base).map_err(transport)?.href();

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(&url, &init).map_err(transport)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    loader::check_status(response.status(), &response.status_text(), &response.url())?;

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| LoadError::Transport("response body is not text".into()))?;
    tracing::debug!(url = %url, bytes = body.len(), "project list fetched");
    loader::parse_projects(&body)
}

fn transport(value: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Transport(js_message(&value))
}
