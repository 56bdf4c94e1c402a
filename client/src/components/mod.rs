//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and list cards while reading shared
//! session and UI state from Leptos context providers.


pub mod court_card;
pub mod guarded;
pub mod list_view;
pub mod match_card;
pub mod navbar;
pub mod tournament_card;
