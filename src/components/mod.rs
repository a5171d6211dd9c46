//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront pages are server-rendered; components here are the few
//! pieces of UI the client creates itself.

pub mod toast;
