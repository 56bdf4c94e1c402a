//! Card for one tournament in the tournaments list.

use leptos::prelude::*;

use crate::net::types::Tournament;
use crate::util::format::short_date;

#[component]
pub fn TournamentCard(tournament: Tournament) -> impl IntoView {
    let Tournament { nombre, descripcion, fecha_inicio, fecha_fin, estado, total_partidos, .. } = tournament;
    let dates = match (fecha_inicio.as_deref(), fecha_fin.as_deref()) {
        (Some(start), Some(end)) => Some(format!("{} - {}", short_date(start), short_date(end))),
        (Some(start), None) => Some(format!("Desde {}", short_date(start))),
        (None, Some(end)) => Some(format!("Hasta {}", short_date(end))),
        (None, None) => None,
    };
    let descripcion = Some(descripcion).filter(|d| !d.trim().is_empty());
    let estado = Some(estado).filter(|e| !e.trim().is_empty());

    view! {
        <article class="card tournament-card">
            <header class="card__header">
                <h3 class="card__title">{nombre}</h3>
                {estado.map(|e| view! { <span class="badge badge--scheduled">{e}</span> })}
            </header>
            {descripcion.map(|d| view! { <p class="card__body">{d}</p> })}
            {dates.map(|d| view! { <p class="card__meta">{d}</p> })}
            {total_partidos.map(|n| view! { <p class="card__meta">{format!("Partidos: {n}")}</p> })}
        </article>
    }
}
