//! Fetch state for the collection list views.
//!
//! DESIGN
//! ======
//! Every list page goes through the same three states so loading, error, and
//! empty rendering stay uniform across tournaments, courts, matches, and users.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use crate::net::api::Collection;
use crate::net::error::ApiError;

/// Lifecycle of one collection fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState<T> {
    Loading,
    Failed(String),
    Loaded(Vec<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// What a list view should draw for its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Error,
    Empty,
    Items(usize),
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn phase(&self) -> ListPhase {
        match self {
            Self::Loading => ListPhase::Loading,
            Self::Failed(_) => ListPhase::Error,
            Self::Loaded(items) if items.is_empty() => ListPhase::Empty,
            Self::Loaded(items) => ListPhase::Items(items.len()),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

/// User-facing copy for one collection's list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListCopy {
    pub title: &'static str,
    pub loading: &'static str,
    pub error_prefix: &'static str,
    pub empty: &'static str,
}

impl ListCopy {
    pub fn for_collection(collection: Collection) -> Self {
        match collection {
            Collection::Tournaments => Self {
                title: "Torneos",
                loading: "Cargando torneos...",
                error_prefix: "Error al cargar torneos",
                empty: "No hay torneos disponibles",
            },
            Collection::Courts => Self {
                title: "Canchas",
                loading: "Cargando canchas...",
                error_prefix: "Error al cargar canchas",
                empty: "No hay canchas disponibles",
            },
            Collection::Matches => Self {
                title: "Partidos",
                loading: "Cargando partidos...",
                error_prefix: "Error al cargar partidos",
                empty: "No hay partidos programados",
            },
            Collection::Users => Self {
                title: "Usuarios",
                loading: "Cargando usuarios...",
                error_prefix: "Error al cargar usuarios",
                empty: "No hay usuarios disponibles",
            },
        }
    }

    pub fn error_message(&self, detail: &str) -> String {
        format!("{}: {detail}", self.error_prefix)
    }
}
