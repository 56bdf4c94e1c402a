//! Courts list with availability.

use leptos::prelude::*;

use crate::components::court_card::CourtCard;
use crate::components::list_view::list_body;
use crate::net::api::Collection;
use crate::net::types::Court;
use crate::state::lists::ListCopy;
use crate::util::collection::use_collection;

#[component]
pub fn CourtsPage() -> impl IntoView {
    let copy = ListCopy::for_collection(Collection::Courts);
    let state = use_collection::<Court>(Collection::Courts);

    view! {
        <section class="page">
            <h1 class="page__title">{copy.title}</h1>
            {list_body(state, copy, |items| {
                view! {
                    <div class="card-grid">
                        {items.into_iter().map(|court| view! { <CourtCard court=court/> }).collect_view()}
                    </div>
                }
            })}
        </section>
    }
}
