//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates presentation to the
//! shared `components`.

pub mod about;
pub mod components;
pub mod home;
pub mod interactivity;
pub mod route;
