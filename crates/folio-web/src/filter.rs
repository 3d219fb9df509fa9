//! Search box and featured-only checkbox.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FilterController, render_projects};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;

use crate::app::Site;
use crate::dom::{self, SiteError};
use crate::projects::ProjectView;

struct FilterBinding {
    site: Rc<Site>,
    view: Rc<ProjectView>,
    controller: RefCell<FilterController>,
    timer: RefCell<Option<Timeout>>,
}

impl FilterBinding {
    fn refresh(&self) {
        let store = self.site.store.borrow();
        let filtered = self.controller.borrow_mut().apply(store.projects());
        let outcome = render_projects(filtered, self.site.messages);
        if let Err(err) = self.view.render(&outcome) {
            tracing::error!(error = %err, "filtered render failed");
        }
    }

    fn on_input(self: &Rc<Self>, value: &str) {
        let ticket = self
            .controller
            .borrow_mut()
            .on_query_input(value, self.site.now());
        let millis = u32::try_from(self.site.config.debounce().as_millis()).unwrap_or(u32::MAX);
        let binding = Rc::clone(self);
        let timeout = Timeout::new(millis, move || {
            let due = binding.controller.borrow_mut().on_timer(ticket);
            if due {
                binding.refresh();
            }
        });
        // Dropping the previous timeout cancels it.
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn on_featured(&self, checked: bool) {
        self.controller.borrow_mut().on_featured_change(checked);
        self.refresh();
    }
}

pub fn attach(site: &Rc<Site>, view: &Rc<ProjectView>) -> Result<(), SiteError> {
    let ids = &site.config.ids;
    let search: HtmlInputElement = site.require(&ids.search_input)?;
    let featured: HtmlInputElement = site.require(&ids.featured_only)?;

    let binding = Rc::new(FilterBinding {
        site: Rc::clone(site),
        view: Rc::clone(view),
        controller: RefCell::new(FilterController::new(site.config.debounce())),
        timer: RefCell::new(None),
    });

    {
        let binding = Rc::clone(&binding);
        let input = search.clone();
        dom::listen(&search, "input", move |_| binding.on_input(&input.value()))?;
    }
    {
        let checkbox = featured.clone();
        dom::listen(&featured, "change", move |_| binding.on_featured(checkbox.checked()))?;
    }
    Ok(())
}
