//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`cart`, `modal`, `submit`, `toast`) so the
//! controller can depend on small focused models that test without a browser.

pub mod cart;
pub mod modal;
pub mod submit;
pub mod toast;
