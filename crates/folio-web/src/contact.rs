//! Contact form submission over `fetch`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::contact::{FormSurface, classify_response};
use folio_core::{ContactController, FormStatus, SubmitError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, Request, RequestInit, Response, Window};

use crate::app::Site;
use crate::dom::{self, SiteError, js_message};

#[derive(Clone)]
struct DomForm {
    form: HtmlFormElement,
    status: HtmlElement,
    button: HtmlButtonElement,
}

impl FormSurface for DomForm {
    fn set_status(&mut self, status: FormStatus) {
        if let Some(color) = status.tone.color() {
            if let Err(err) = self.status.style().set_property("color", color) {
                tracing::warn!(error = %js_message(&err), "status color not set");
            }
        }
        self.status.set_text_content(Some(status.text));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }
}

/// Wire the contact form. Pages without one get nothing.
pub fn attach(site: &Rc<Site>) -> Result<(), SiteError> {
    let ids = &site.config.ids;
    let Some(form) = site.optional::<HtmlFormElement>(&ids.contact_form) else {
        tracing::debug!("no contact form on this page");
        return Ok(());
    };
    let surface = DomForm {
        form: form.clone(),
        status: site.require(&ids.form_status)?,
        button: site.require(&ids.send_button)?,
    };
    let controller = Rc::new(RefCell::new(ContactController::new(site.messages)));
    let window = site.window.clone();

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let mut surface = surface.clone();
        let controller = Rc::clone(&controller);
        let window = window.clone();
        controller.borrow_mut().begin(&mut surface);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_form(&window, &surface.form).await;
            controller.borrow_mut().finish(&mut surface, outcome);
        });
    })
}

async fn post_form(window: &Window, form: &HtmlFormElement) -> Result<(), SubmitError> {
    let endpoint = form.get_attribute("action").unwrap_or_default();
    let data = FormData::new_with_form(form).map_err(transport)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    let request = Request::new_with_str_and_init(&endpoint, &init).map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    let body = if response.ok() {
        None
    } else {
        read_text(&response).await
    };
    classify_response(response.status(), &response.status_text(), body.as_deref())
}

/// Body text, or `None` if it cannot be read.
async fn read_text(response: &Response) -> Option<String> {
    let promise = response.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

fn transport(value: JsValue) -> SubmitError {
    SubmitError::Transport(js_message(&value))
}
