//! UI controller: binds the server-rendered page to client state.
//!
//! ARCHITECTURE
//! ============
//! [`install`] runs once at start. It resolves every element each component
//! needs (product cards, edit modal, forms) and attaches listeners for the
//! life of the page. A component whose markup is incomplete is skipped with a
//! logged [`BindError`]; the others still bind.
//!
//! [`Storefront`] holds the cart store and config shared by all listeners.
//! Its actions return the toast to show, so their behavior is testable
//! without a browser.


pub mod card;
#[cfg(feature = "hydrate")]
mod dom;
pub mod forms;
pub mod modal;

use crate::config::StorefrontConfig;
use crate::state::cart::CartStore;
use crate::state::toast::ToastMessage;
use crate::util::storage::KeyValueStore;

use card::{CardSnapshot, line_item_from_card};

pub const CLEAR_CART_SELECTOR: &str = "[data-action='clear-cart']";

/// Required page structure that could not be resolved.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindError {
    #[error("missing element {selector}")]
    MissingElement { selector: String },
    #[error("element {selector} is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },
    #[error("missing attribute {attribute}")]
    MissingAttribute { attribute: &'static str },
}

/// State shared by every bound listener.
pub struct Storefront<S> {
    pub cart: CartStore<S>,
    pub config: StorefrontConfig,
}

impl<S: KeyValueStore> Storefront<S> {
    pub fn new(storage: S, config: StorefrontConfig) -> Self {
        Self { cart: CartStore::new(storage, config.cart_storage_key.clone()), config }
    }

    /// Record the card's current selection in the cart.
    ///
    /// An incomplete card and a failed write both come back as warning
    /// toasts, so every click produces visible feedback.
    pub fn add_to_cart(&self, card: &CardSnapshot) -> ToastMessage {
        let item = match line_item_from_card(card) {
            Ok(item) => item,
            Err(e) => {
                leptos::logging::warn!("add to cart skipped: {e}");
                return ToastMessage::cannot_add();
            }
        };
        let name = item.name.clone();
        match self.cart.add(item) {
            Ok(cart) => {
                leptos::logging::log!(
                    "{name} added; cart has {} entries, {} units, subtotal {:.2}",
                    cart.len(),
                    cart.unit_count(),
                    cart.subtotal()
                );
                ToastMessage::added_to_cart(&name)
            }
            Err(e) => {
                leptos::logging::error!("cart not saved: {e}");
                ToastMessage::storage_failed()
            }
        }
    }

    pub fn clear_cart(&self) -> ToastMessage {
        match self.cart.clear() {
            Ok(()) => ToastMessage::cart_cleared(),
            Err(e) => {
                leptos::logging::error!("cart not cleared: {e}");
                ToastMessage::storage_failed()
            }
        }
    }
}

/// Bind the current document. Called from the WASM start function.
#[cfg(feature = "hydrate")]
pub fn install() {
    use std::rc::Rc;

    use crate::components::toast::show_toast;
    use crate::config::CONFIG_ELEMENT_ID;
    use crate::util::lazy_images;
    use crate::util::storage::{LocalStorage, MemoryStorage};

    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("no window; storefront not bound");
        return;
    };
    let Some(document) = window.document() else {
        leptos::logging::warn!("no document; storefront not bound");
        return;
    };

    let raw_config = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = StorefrontConfig::resolve(raw_config.as_deref());

    let storage: Box<dyn KeyValueStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            leptos::logging::error!("cart will not persist across pages: {e}");
            show_toast(ToastMessage::storage_failed(), config.toast_duration_ms);
            Box::new(MemoryStorage::new())
        }
    };
    let shop = Rc::new(Storefront::new(storage, config));
    leptos::logging::log!("cart loaded with {} entries", shop.cart.load().len());

    let mut cards = 0;
    for element in dom::query_all(&document, card::PRODUCT_CARD_SELECTOR) {
        match card::BoundCard::bind(&document, &element) {
            Ok(bound) => {
                bound.wire(Rc::clone(&shop));
                cards += 1;
            }
            Err(e) => leptos::logging::warn!("product card skipped: {e}"),
        }
    }

    match modal::BoundModal::bind(&document) {
        Ok(bound) => bound.wire(&document),
        Err(e) => leptos::logging::log!("edit modal not bound: {e}"),
    }

    let forms = forms::wire(&window, &document, &shop.config.processing_label);

    for control in dom::query_all(&document, CLEAR_CART_SELECTOR) {
        let shop = Rc::clone(&shop);
        dom::listen(&control, "click", move |ev| {
            ev.prevent_default();
            show_toast(shop.clear_cart(), shop.config.toast_duration_ms);
        });
    }

    let images = lazy_images::promote_all(&document);
    leptos::logging::log!("storefront bound: {cards} cards, {forms} forms, {images} lazy images");
}
