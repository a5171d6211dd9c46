//! Double-submit protection for every form on the page.

pub const FORM_SELECTOR: &str = "form";
pub const SUBMIT_CONTROL_SELECTOR: &str = "button[type='submit']";

#[cfg(feature = "hydrate")]
pub(super) use bound::wire;

#[cfg(feature = "hydrate")]
mod bound {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlButtonElement, PageTransitionEvent, Window};

    use super::*;
    use crate::controller::dom;
    use crate::state::submit::{SubmitDecision, SubmitGuard};

    struct BoundForm {
        submit: Option<HtmlButtonElement>,
        guard: RefCell<SubmitGuard>,
    }

    impl BoundForm {
        fn on_submit(&self, ev: &web_sys::Event, processing_label: &str) {
            let label = self.submit.as_ref().and_then(|button| button.text_content());
            match self.guard.borrow_mut().begin(label) {
                SubmitDecision::Proceed => {
                    if let Some(button) = &self.submit {
                        button.set_disabled(true);
                        button.set_text_content(Some(processing_label));
                    }
                }
                SubmitDecision::Suppress => ev.prevent_default(),
            }
        }

        fn restore(&self) {
            let Some(label) = self.guard.borrow_mut().reset() else {
                return;
            };
            if let Some(button) = &self.submit {
                button.set_disabled(false);
                button.set_text_content(Some(&label));
            }
        }
    }

    /// Guard every form; re-arm them when the page comes back from the
    /// back/forward cache. Returns how many forms were bound.
    pub fn wire(window: &Window, document: &Document, processing_label: &str) -> usize {
        let processing_label: Rc<str> = Rc::from(processing_label);
        let mut forms = Vec::new();

        for form in dom::query_all(document, FORM_SELECTOR) {
            let submit = dom::query(&form, SUBMIT_CONTROL_SELECTOR)
                .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned());
            let bound = Rc::new(BoundForm { submit, guard: RefCell::default() });
            forms.push(Rc::clone(&bound));

            let processing_label = Rc::clone(&processing_label);
            dom::listen(&form, "submit", move |ev| bound.on_submit(&ev, &processing_label));
        }

        let count = forms.len();
        dom::listen(window, "pageshow", move |ev| {
            let restored = ev.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
            if restored {
                forms.iter().for_each(|form| form.restore());
            }
        });
        count
    }
}
