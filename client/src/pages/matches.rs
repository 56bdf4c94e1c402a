//! Matches list with status badges.

use leptos::prelude::*;

use crate::components::list_view::list_body;
use crate::components::match_card::MatchCard;
use crate::net::api::Collection;
use crate::net::types::Match;
use crate::state::lists::ListCopy;
use crate::util::collection::use_collection;

#[component]
pub fn MatchesPage() -> impl IntoView {
    let copy = ListCopy::for_collection(Collection::Matches);
    let state = use_collection::<Match>(Collection::Matches);

    view! {
        <section class="page">
            <h1 class="page__title">{copy.title}</h1>
            {list_body(state, copy, |items| {
                view! {
                    <div class="card-grid">
                        {items.into_iter().map(|item| view! { <MatchCard item=item/> }).collect_view()}
                    </div>
                }
            })}
        </section>
    }
}
