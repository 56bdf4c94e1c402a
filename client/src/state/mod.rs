//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `lists`, etc.) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod context;
pub mod lists;
pub mod registration;
pub mod session;
pub mod ui;
