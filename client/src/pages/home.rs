//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{LANDING_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::state::context::SessionContext;

const FEATURES: &[(&str, &str)] = &[
    ("Torneos", "Consulta los torneos activos y su calendario."),
    ("Partidos", "Sigue la programación y los resultados de cada partido."),
    ("Canchas", "Revisa la disponibilidad de las canchas de la asociación."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = SessionContext::expect();

    view! {
        <section class="hero">
            <h1 class="hero__title">"ASOPADEL Barinas"</h1>
            <p class="hero__subtitle">"Asociación de Pádel del estado Barinas"</p>
            <div class="hero__actions">
                <Show
                    when=move || session.state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href=LOGIN_PATH attr:class="btn btn--primary">
                                "Iniciar Sesión"
                            </A>
                            <A href=REGISTER_PATH attr:class="btn btn--light">
                                "Registrarse"
                            </A>
                        }
                    }
                >
                    <A href=LANDING_PATH attr:class="btn btn--primary">
                        "Ir al panel"
                    </A>
                </Show>
            </div>
        </section>
        <section class="features">
            {FEATURES
                .iter()
                .map(|(title, blurb)| {
                    view! {
                        <article class="card feature-card">
                            <h3 class="card__title">{*title}</h3>
                            <p class="card__body">{*blurb}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
