//! Thin web-sys helpers used by the binding step.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList};

use super::BindError;

/// First match of `selector` under `root`. An invalid selector is logged.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            leptos::logging::warn!("invalid selector {selector}: {e:?}");
            None
        }
    }
}

pub fn require(root: &Element, selector: &str) -> Result<Element, BindError> {
    query(root, selector).ok_or_else(|| BindError::MissingElement { selector: selector.to_owned() })
}

pub fn require_by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement { selector: format!("#{id}") })
}

pub fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, BindError> {
    element
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType { selector: selector.to_owned(), expected })
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector), selector)
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector), selector)
}

fn elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(e) => {
            leptos::logging::warn!("invalid selector {selector}: {e:?}");
            Vec::new()
        }
    }
}

/// Attach `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

pub fn set_display(element: &HtmlElement, display: &str) {
    if let Err(e) = element.style().set_property("display", display) {
        leptos::logging::warn!("failed to set display: {e:?}");
    }
}

/// Write `value` into an `<input>` or `<textarea>`.
pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    } else {
        leptos::logging::warn!("#{} is not a form field", element.id());
    }
}
