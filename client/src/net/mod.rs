//! Data access for the interactivity page.

pub mod api;
pub mod types;
