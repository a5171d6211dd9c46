//! Product-edit modal state machine.
//!
//! DESIGN
//! ======
//! `Closed` ⇄ `Open(draft)`. Opening carries the product fields that
//! populate the form; closing clears them. The controller renders whatever
//! [`EditModalState::field_values`] reports, so a closed modal always shows
//! empty fields.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Form field ids inside the edit modal, in render order.
pub const FIELD_ID: &str = "edit-id";
pub const FIELD_NAME: &str = "edit-nombre";
pub const FIELD_DESCRIPTION: &str = "edit-descripcion";
pub const FIELD_PRICE: &str = "edit-precio";

/// Body class applied while the modal is open (scroll lock).
pub const BODY_OPEN_CLASS: &str = "modal-open";

/// Product values loaded into the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductDraft {
    /// Build a draft from an edit trigger's `data-*` attributes.
    ///
    /// `description` is optional; every other attribute is required.
    pub fn from_attributes<F>(attr: F) -> Result<Self, &'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| attr(name).ok_or(name);
        Ok(Self {
            id: required("data-id")?,
            name: required("data-name")?,
            description: attr("data-description").unwrap_or_default(),
            price: required("data-price")?,
        })
    }
}

/// Why the modal is being closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    /// Click landed on the overlay outside the modal body.
    Backdrop,
    CloseControl,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditModalState {
    #[default]
    Closed,
    Open(ProductDraft),
}

impl EditModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Open (or re-open) with `draft`.
    pub fn open(&mut self, draft: ProductDraft) {
        *self = Self::Open(draft);
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.is_open() {
            return false;
        }
        leptos::logging::log!("edit modal closed ({reason:?})");
        *self = Self::Closed;
        true
    }

    /// CSS `display` value for the modal element.
    pub fn display(&self) -> &'static str {
        if self.is_open() { "block" } else { "none" }
    }

    /// `(field id, value)` pairs to write into the form.
    pub fn field_values(&self) -> [(&'static str, &str); 4] {
        match self {
            Self::Open(draft) => [
                (FIELD_ID, draft.id.as_str()),
                (FIELD_NAME, draft.name.as_str()),
                (FIELD_DESCRIPTION, draft.description.as_str()),
                (FIELD_PRICE, draft.price.as_str()),
            ],
            Self::Closed => [(FIELD_ID, ""), (FIELD_NAME, ""), (FIELD_DESCRIPTION, ""), (FIELD_PRICE, "")],
        }
    }
}

/// Whether a keydown with `key` should close the modal.
pub fn closes_on_key(key: &str) -> bool {
    key == "Escape"
}
