//! Card for one match: tournament, court, schedule, status, result.

use leptos::prelude::*;

use crate::net::types::{Match, MatchStatus};
use crate::util::format::{short_date, short_time};

/// Badge label for a match status.
pub fn status_label(status: MatchStatus, estado: &str) -> String {
    match status {
        MatchStatus::Finished => "Finalizado".to_owned(),
        MatchStatus::InProgress => "En curso".to_owned(),
        MatchStatus::Scheduled if estado.trim().is_empty() => "Programado".to_owned(),
        MatchStatus::Scheduled => estado.replace('_', " "),
    }
}

/// Date and time line; either part may be missing.
pub fn schedule_label(fecha: Option<&str>, hora: Option<&str>) -> String {
    match (fecha, hora) {
        (Some(date), Some(time)) => format!("{} {}", short_date(date), short_time(time)),
        (Some(date), None) => short_date(date),
        (None, Some(time)) => short_time(time).to_owned(),
        (None, None) => "Sin fecha".to_owned(),
    }
}

#[component]
pub fn MatchCard(item: Match) -> impl IntoView {
    let status = item.status();
    let label = status_label(status, &item.estado);
    let schedule = schedule_label(item.fecha.as_deref(), item.hora.as_deref());
    let tournament = item.torneo_nombre.unwrap_or_else(|| "Partido".to_owned());
    let court = item.cancha_nombre.map(|c| format!("Cancha: {c}"));
    let result = item.resultado.filter(|r| !r.trim().is_empty());

    view! {
        <article class="card match-card">
            <header class="card__header">
                <h3 class="card__title">{tournament}</h3>
                <span class=status.badge_class()>{label}</span>
            </header>
            <p class="card__meta">{schedule}</p>
            {court.map(|c| view! { <p class="card__meta">{c}</p> })}
            {result.map(|r| view! { <p class="card__body match-card__result">{format!("Resultado: {r}")}</p> })}
        </article>
    }
}
