//! Toast notification content.
//!
//! Every piece of shopper feedback goes through a toast; nothing in the
//! storefront uses blocking dialogs.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    /// Something the shopper should know failed (e.g. cart not saved).
    Warning,
}

impl ToastKind {
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#ff4d6d",
            Self::Warning => "#b45309",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn added_to_cart(product_name: &str) -> Self {
        Self { kind: ToastKind::Success, text: format!("{product_name} agregado al carrito ✅") }
    }

    pub fn cart_cleared() -> Self {
        Self { kind: ToastKind::Success, text: "Carrito vaciado".to_owned() }
    }

    pub fn storage_failed() -> Self {
        Self {
            kind: ToastKind::Warning,
            text: "No se pudo guardar el carrito en este navegador ⚠️".to_owned(),
        }
    }

    /// The card could not produce a line item (no name or no price).
    pub fn cannot_add() -> Self {
        Self {
            kind: ToastKind::Warning,
            text: "No se pudo agregar este producto al carrito ⚠️".to_owned(),
        }
    }

    /// Inline style for the toast element, colored by kind.
    pub fn style(&self) -> String {
        format!(
            "position:fixed;bottom:20px;right:20px;background:{};color:white;padding:12px 18px;\
             border-radius:8px;z-index:9999;font-weight:bold;",
            self.kind.background()
        )
    }
}
