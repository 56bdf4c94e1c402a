//! Tournaments list.

use leptos::prelude::*;

use crate::components::list_view::list_body;
use crate::components::tournament_card::TournamentCard;
use crate::net::api::Collection;
use crate::net::types::Tournament;
use crate::state::lists::ListCopy;
use crate::util::collection::use_collection;

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let copy = ListCopy::for_collection(Collection::Tournaments);
    let state = use_collection::<Tournament>(Collection::Tournaments);

    view! {
        <section class="page">
            <h1 class="page__title">{copy.title}</h1>
            {list_body(state, copy, |items| {
                view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|tournament| view! { <TournamentCard tournament=tournament/> })
                            .collect_view()}
                    </div>
                }
            })}
        </section>
    }
}
