//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form orchestration and delegates
//! card and list rendering to `components`.

pub mod courts;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod matches;
pub mod register;
pub mod tournaments;
pub mod users;
