//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the rest of the crate renders identically on the server
//! and stays testable natively.

pub mod document;
pub mod theme_storage;
