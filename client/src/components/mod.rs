//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `button` and `card` are stateless primitives the pages compose; `header`,
//! `footer` and `theme_switcher` form the chrome that stays mounted across
//! routes.

pub mod button;
pub mod card;
pub mod footer;
pub mod header;
pub mod theme_switcher;
