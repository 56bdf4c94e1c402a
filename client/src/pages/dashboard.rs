//! Authenticated landing page with entry cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::UserProfile;
use crate::state::context::SessionContext;

/// One dashboard entry card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardEntry {
    pub title: &'static str,
    pub blurb: &'static str,
    pub href: &'static str,
}

const ENTRIES: &[DashboardEntry] = &[
    DashboardEntry { title: "Torneos", blurb: "Torneos activos y próximos.", href: "/torneos" },
    DashboardEntry { title: "Partidos", blurb: "Programación y resultados.", href: "/partidos" },
    DashboardEntry { title: "Canchas", blurb: "Disponibilidad de canchas.", href: "/canchas" },
];

const USERS_ENTRY: DashboardEntry =
    DashboardEntry { title: "Usuarios", blurb: "Miembros de la asociación.", href: "/usuarios" };

/// Entry cards visible to `user`; the users card is admin-only.
pub fn entries_for(user: Option<&UserProfile>) -> Vec<DashboardEntry> {
    let mut entries = ENTRIES.to_vec();
    if user.is_some_and(UserProfile::is_admin) {
        entries.push(USERS_ENTRY);
    }
    entries
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = SessionContext::expect();
    let greeting = move || {
        session
            .state
            .get()
            .user()
            .map(|user| format!("Bienvenido, {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <section class="page dashboard">
            <h1 class="page__title">{greeting}</h1>
            <div class="card-grid">
                {move || {
                    entries_for(session.state.get().user())
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <A href=entry.href attr:class="card dashboard-card">
                                    <h3 class="card__title">{entry.title}</h3>
                                    <p class="card__body">{entry.blurb}</p>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
