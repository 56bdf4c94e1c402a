//! Card for one court, with its availability badge.

use leptos::prelude::*;

use crate::net::types::Court;

/// Badge class and label for a court's availability flag.
pub fn availability_badge(disponible: bool) -> (&'static str, &'static str) {
    if disponible {
        ("badge badge--available", "Disponible")
    } else {
        ("badge badge--unavailable", "No disponible")
    }
}

#[component]
pub fn CourtCard(court: Court) -> impl IntoView {
    let Court { nombre, descripcion, disponible, reservas_activas, .. } = court;
    let (badge_class, badge_label) = availability_badge(disponible);
    let descripcion = descripcion.filter(|d| !d.trim().is_empty());

    view! {
        <article class="card court-card">
            <header class="card__header">
                <h3 class="card__title">{nombre}</h3>
                <span class=badge_class>{badge_label}</span>
            </header>
            {descripcion.map(|d| view! { <p class="card__body">{d}</p> })}
            {reservas_activas.map(|n| view! { <p class="card__meta">{format!("Reservas activas: {n}")}</p> })}
        </article>
    }
}
