//! Shopping cart model and its persistent store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart lives entirely in the browser. [`CartStore`] is the only code
//! that reads or writes the cart key; controllers go through `load`, `add`,
//! `save` and `clear` rather than touching storage directly.
//!
//! PERSISTED FORMAT
//! ================
//! A JSON array of `{"nombre", "opcion", "precio", "cantidad"}` objects, the
//! shape the storefront's cart page already reads. There is no schema
//! version. Entries written by the older storefront script may lack `opcion`
//! or `precio`, or carry `precio` as a string and `cantidad` as `null`; those
//! load with defaults. Entries are decoded one at a time, so an entry that
//! cannot be read at all (no `nombre`, not an object) is dropped with a
//! warning and the rest of the cart survives.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::util::parse::{MIN_QUANTITY, parse_price, parse_quantity};
use crate::util::storage::{KeyValueStore, StorageError};

/// Option label for products sold without a variant selector.
pub const NOT_APPLICABLE: &str = "N/A";

/// One add-to-cart event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Selected variant label, or [`NOT_APPLICABLE`].
    #[serde(rename = "opcion", default = "not_applicable")]
    pub option: String,
    #[serde(rename = "precio", default, deserialize_with = "lenient_price")]
    pub unit_price: f64,
    /// Always at least [`MIN_QUANTITY`].
    #[serde(rename = "cantidad", default = "min_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// Build an item; `None` option means the product has no variants.
    pub fn new(name: impl Into<String>, option: Option<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            option: option.unwrap_or_else(not_applicable),
            unit_price: if unit_price.is_finite() { unit_price.max(0.0) } else { 0.0 },
            quantity: quantity.max(MIN_QUANTITY),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Ordered list of line items. Repeated adds of the same product stay as
/// separate entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return this cart with `item` appended at the end.
    #[must_use]
    pub fn appended(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sum of quantities across all entries.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

/// The outer value must be an array; entries inside it are skipped
/// individually when they cannot be read.
impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Value>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<LineItem>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    leptos::logging::warn!("cart entry {index} skipped: {e}");
                    None
                }
            })
            .collect())
    }
}

/// Persistent cart storage over a [`KeyValueStore`] backend.
///
/// Writes are last-writer-wins: there is no merge with carts saved by other
/// tabs.
#[derive(Clone, Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Read the persisted cart. Missing, unreadable, or malformed data yields
    /// an empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                leptos::logging::warn!("cart load failed, starting empty: {e}");
                return Cart::new();
            }
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                leptos::logging::warn!("persisted cart under {} is malformed, starting empty: {e}", self.key);
                Cart::new()
            }
        }
    }

    /// Overwrite the persisted cart.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &raw)
    }

    /// Load, append `item`, and save. Returns the cart as persisted.
    pub fn add(&self, item: LineItem) -> Result<Cart, StorageError> {
        let cart = self.load().appended(item);
        self.save(&cart)?;
        Ok(cart)
    }

    /// Remove the persisted cart entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}

fn not_applicable() -> String {
    NOT_APPLICABLE.to_owned()
}

fn min_quantity() -> u32 {
    MIN_QUANTITY
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0),
        Value::String(s) => parse_price(&s),
        _ => 0.0,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= f64::from(MIN_QUANTITY) => v.min(f64::from(u32::MAX)) as u32,
            _ => MIN_QUANTITY,
        },
        Value::String(s) => parse_quantity(&s),
        _ => MIN_QUANTITY,
    })
}
