//! Theme initialization and toggle.
//!
//! Reads the stored `light`/`dark`/`auto` preference from `localStorage` and
//! applies a `data-theme` attribute to the `<html>` element. `auto` follows
//! `prefers-color-scheme`, including later OS changes. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_KEY;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Stored theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Toggle order: light → dark → auto → light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    /// The concrete theme to paint, given the system preference.
    pub fn resolve(self, system_prefers_dark: bool) -> Self {
        match self {
            Self::Auto if system_prefers_dark => Self::Dark,
            Self::Auto => Self::Light,
            other => other,
        }
    }

    /// Toggle button glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::Auto => "◐",
        }
    }
}

/// Read the stored preference; missing or unknown values mean `auto`.
pub fn load(store: &impl KeyValueStore) -> Theme {
    store.get(THEME_KEY).and_then(|raw| Theme::parse(&raw)).unwrap_or_default()
}

pub fn save(store: &impl KeyValueStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Read the preference from browser storage.
pub fn read_preference() -> Theme {
    load(&LocalStorage)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the resolved `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    let resolved = theme.resolve(system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", resolved.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = resolved;
    }
}

/// Advance the preference, apply it, and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.next();
    apply(next);
    save(&LocalStorage, next);
    next
}

/// Whether an OS color-scheme change should re-apply `preference`.
pub fn follows_system(preference: Theme) -> bool {
    preference == Theme::Auto
}

/// Re-apply the theme whenever the OS color scheme changes while the
/// preference returned by `current` is `auto`.
pub fn watch_system(current: impl Fn() -> Theme + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(query) =
            web_sys::window().and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            return;
        };
        let on_change = Closure::wrap(Box::new(move || {
            let preference = current();
            if follows_system(preference) {
                apply(preference);
            }
        }) as Box<dyn FnMut()>);
        let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        // Listener stays registered for the page lifetime.
        on_change.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = current;
    }
}
