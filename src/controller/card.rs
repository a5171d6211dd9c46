//! Product card: quantity stepper and add-to-cart.
//!
//! A card is any element carrying `data-product-id`. Its name heading, the
//! `#cantidad-<id>` quantity input and the add-to-cart trigger are required;
//! the variant `<select>`, the `.price` label and the stepper buttons are
//! optional.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::state::cart::LineItem;
use crate::util::parse::{MIN_QUANTITY, parse_price, parse_quantity};

pub const PRODUCT_CARD_SELECTOR: &str = "[data-product-id]";
pub const PRODUCT_ID_ATTR: &str = "data-product-id";
pub const CARD_NAME_SELECTOR: &str = "h3";
pub const VARIANT_SELECTOR: &str = "select";
pub const PRICE_SELECTOR: &str = ".price";
pub const ADD_TO_CART_SELECTOR: &str = "[data-action='add-to-cart']";
pub const INCREMENT_SELECTOR: &str = "[data-action='increment']";
pub const DECREMENT_SELECTOR: &str = "[data-action='decrement']";

/// Id of the quantity input for product `id`.
pub fn quantity_input_id(id: &str) -> String {
    format!("cantidad-{id}")
}

/// Selected entry of a card's variant selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantChoice {
    /// Option value; holds the variant's price.
    pub value: String,
    /// Visible option text, e.g. "Grande".
    pub label: String,
}

/// Card contents read at the moment of an add-to-cart click.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSnapshot {
    pub name: String,
    pub variant: Option<VariantChoice>,
    pub price_text: Option<String>,
    pub quantity_text: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CardError {
    #[error("product name is empty")]
    MissingName,
    #[error("card has neither a variant selector nor a price")]
    MissingPrice,
}

/// Build the line item an add-to-cart click records.
pub fn line_item_from_card(card: &CardSnapshot) -> Result<LineItem, CardError> {
    let name = card.name.trim();
    if name.is_empty() {
        return Err(CardError::MissingName);
    }
    let (unit_price, option) = match (&card.variant, &card.price_text) {
        (Some(variant), _) => (parse_price(&variant.value), Some(variant.label.trim().to_owned())),
        (None, Some(price)) => (parse_price(price), None),
        (None, None) => return Err(CardError::MissingPrice),
    };
    Ok(LineItem::new(name, option, unit_price, parse_quantity(&card.quantity_text)))
}

/// Stepper value after a `+` click. No upper bound.
pub fn increment(current: &str) -> u32 {
    parse_quantity(current).saturating_add(1)
}

/// Stepper value after a `-` click; never below [`MIN_QUANTITY`].
pub fn decrement(current: &str) -> u32 {
    let quantity = parse_quantity(current);
    if quantity > MIN_QUANTITY { quantity - 1 } else { MIN_QUANTITY }
}

#[cfg(feature = "hydrate")]
pub(super) use bound::BoundCard;

#[cfg(feature = "hydrate")]
mod bound {
    use std::rc::Rc;

    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use super::*;
    use crate::components::toast::show_toast;
    use crate::controller::{BindError, Storefront, dom};
    use crate::util::storage::KeyValueStore;

    /// Card elements resolved once at bind time.
    pub struct BoundCard {
        id: String,
        name: Element,
        quantity: HtmlInputElement,
        variant: Option<HtmlSelectElement>,
        price: Option<Element>,
        add: Element,
        increment: Option<Element>,
        decrement: Option<Element>,
    }

    impl BoundCard {
        pub fn bind(document: &Document, card: &Element) -> Result<Self, BindError> {
            let id = card
                .get_attribute(PRODUCT_ID_ATTR)
                .filter(|id| !id.trim().is_empty())
                .ok_or(BindError::MissingAttribute { attribute: PRODUCT_ID_ATTR })?;
            let quantity_id = quantity_input_id(&id);
            let quantity = dom::cast(dom::require_by_id(document, &quantity_id)?, &quantity_id, "HtmlInputElement")?;
            let variant = match dom::query(card, VARIANT_SELECTOR) {
                Some(el) => Some(dom::cast(el, VARIANT_SELECTOR, "HtmlSelectElement")?),
                None => None,
            };
            Ok(Self {
                name: dom::require(card, CARD_NAME_SELECTOR)?,
                quantity,
                variant,
                price: dom::query(card, PRICE_SELECTOR),
                add: dom::require(card, ADD_TO_CART_SELECTOR)?,
                increment: dom::query(card, INCREMENT_SELECTOR),
                decrement: dom::query(card, DECREMENT_SELECTOR),
                id,
            })
        }

        fn snapshot(&self) -> CardSnapshot {
            CardSnapshot {
                name: self.name.text_content().unwrap_or_default(),
                variant: self.variant.as_ref().and_then(selected_variant),
                price_text: self.price.as_ref().and_then(|el| el.text_content()),
                quantity_text: self.quantity.value(),
            }
        }

        fn step(&self, next: fn(&str) -> u32) {
            let value = next(&self.quantity.value());
            self.quantity.set_value(&value.to_string());
        }

        /// Attach stepper and add-to-cart listeners for the page lifetime.
        pub fn wire<S: KeyValueStore + 'static>(self, shop: Rc<Storefront<S>>) {
            let card = Rc::new(self);

            if let Some(button) = &card.increment {
                let card = Rc::clone(&card);
                dom::listen(button, "click", move |_| card.step(increment));
            }
            if let Some(button) = &card.decrement {
                let card = Rc::clone(&card);
                dom::listen(button, "click", move |_| card.step(decrement));
            }

            let add = card.add.clone();
            dom::listen(&add, "click", move |ev| {
                ev.prevent_default();
                leptos::logging::log!("product {}: add to cart", card.id);
                show_toast(shop.add_to_cart(&card.snapshot()), shop.config.toast_duration_ms);
            });
        }
    }

    fn selected_variant(select: &HtmlSelectElement) -> Option<VariantChoice> {
        let Ok(index) = u32::try_from(select.selected_index()) else {
            return None;
        };
        let label = select.item(index)?.text_content().unwrap_or_default();
        Some(VariantChoice { value: select.value(), label })
    }
}
