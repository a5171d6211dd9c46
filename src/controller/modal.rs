//! Edit modal binding for the admin product list.
//!
//! The modal markup (`#modal-editar` and its four form fields) only exists on
//! the admin page; elsewhere binding reports a missing element and the
//! storefront carries on without it.

pub const MODAL_ID: &str = "modal-editar";
pub const EDIT_TRIGGER_SELECTOR: &str = "[data-action='edit-product']";
pub const CLOSE_MODAL_SELECTOR: &str = "[data-action='close-modal']";

#[cfg(feature = "hydrate")]
pub(super) use bound::BoundModal;

#[cfg(feature = "hydrate")]
mod bound {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

    use super::*;
    use crate::controller::{BindError, dom};
    use crate::state::modal::{
        BODY_OPEN_CLASS, CloseReason, EditModalState, FIELD_DESCRIPTION, FIELD_ID, FIELD_NAME, FIELD_PRICE,
        ProductDraft, closes_on_key,
    };

    pub struct BoundModal {
        overlay: HtmlElement,
        body: HtmlElement,
        fields: Vec<(&'static str, Element)>,
        state: RefCell<EditModalState>,
    }

    impl BoundModal {
        pub fn bind(document: &Document) -> Result<Self, BindError> {
            let overlay = dom::cast(dom::require_by_id(document, MODAL_ID)?, MODAL_ID, "HtmlElement")?;
            let body = document.body().ok_or(BindError::MissingElement { selector: "body".to_owned() })?;
            let fields = [FIELD_ID, FIELD_NAME, FIELD_DESCRIPTION, FIELD_PRICE]
                .into_iter()
                .map(|id| dom::require_by_id(document, id).map(|el| (id, el)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self { overlay, body, fields, state: RefCell::default() })
        }

        fn render(&self) {
            let state = self.state.borrow();
            dom::set_display(&self.overlay, state.display());

            let classes = self.body.class_list();
            let toggled = if state.is_open() {
                classes.add_1(BODY_OPEN_CLASS)
            } else {
                classes.remove_1(BODY_OPEN_CLASS)
            };
            if let Err(e) = toggled {
                leptos::logging::warn!("failed to toggle body class: {e:?}");
            }

            for (id, value) in state.field_values() {
                if let Some((_, field)) = self.fields.iter().find(|(field_id, _)| *field_id == id) {
                    dom::set_field_value(field, value);
                }
            }
        }

        fn open(&self, draft: ProductDraft) {
            leptos::logging::log!("editing product {}", draft.id);
            self.state.borrow_mut().open(draft);
            self.render();
        }

        fn close(&self, reason: CloseReason) {
            let changed = self.state.borrow_mut().close(reason);
            if changed {
                self.render();
            }
        }

        /// Attach trigger, close, backdrop and Escape listeners.
        pub fn wire(self, document: &Document) {
            let modal = Rc::new(self);

            for trigger in dom::query_all(document, EDIT_TRIGGER_SELECTOR) {
                let draft = match ProductDraft::from_attributes(|name| trigger.get_attribute(name)) {
                    Ok(draft) => draft,
                    Err(attribute) => {
                        leptos::logging::warn!("edit trigger skipped: {}", BindError::MissingAttribute { attribute });
                        continue;
                    }
                };
                let modal = Rc::clone(&modal);
                dom::listen(&trigger, "click", move |ev| {
                    ev.prevent_default();
                    modal.open(draft.clone());
                });
            }

            for control in dom::query_all_within(&modal.overlay, CLOSE_MODAL_SELECTOR) {
                let modal = Rc::clone(&modal);
                dom::listen(&control, "click", move |_| modal.close(CloseReason::CloseControl));
            }

            {
                let overlay = modal.overlay.clone();
                let overlay_js: JsValue = overlay.clone().into();
                let modal = Rc::clone(&modal);
                dom::listen(&overlay, "click", move |ev| {
                    // Clicks inside the modal body bubble up with a different target.
                    if ev.target().is_some_and(|target| JsValue::from(target) == overlay_js) {
                        modal.close(CloseReason::Backdrop);
                    }
                });
            }

            dom::listen(document, "keydown", move |ev| {
                if ev.dyn_ref::<KeyboardEvent>().is_some_and(|key| closes_on_key(&key.key())) {
                    modal.close(CloseReason::Escape);
                }
            });
        }
    }
}
