//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme, mobile menu) out of session state so
//! the navbar can evolve independently of auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for the navbar and theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
}
