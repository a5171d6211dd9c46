//! Utility helpers shared across the storefront client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! controller logic to improve reuse and testability.

pub mod lazy_images;
pub mod parse;
pub mod storage;
