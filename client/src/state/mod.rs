//! Plain state types wrapped in `RwSignal`s by the components that own them.
//!
//! DESIGN
//! ======
//! Each type is independent and page- or component-local; nothing here is
//! provided through context. Keeping the transitions on plain structs lets
//! them be unit-tested without a reactive runtime.

pub mod counter;
pub mod posts;
pub mod theme;
pub mod todos;
