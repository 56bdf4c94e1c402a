//! Shared loading / error / empty rendering for collection views.

use leptos::prelude::*;

use crate::state::lists::{ListCopy, ListPhase, ListState};

/// Render `state` with `copy`, delegating loaded items to `render`.
pub fn list_body<T, F, V>(state: RwSignal<ListState<T>>, copy: ListCopy, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(Vec<T>) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match state.with(ListState::phase) {
        ListPhase::Loading => view! { <p class="list-status">{copy.loading}</p> }.into_any(),
        ListPhase::Error => {
            let detail = state.with(|s| s.error().unwrap_or_default().to_owned());
            view! { <p class="list-status list-status--error">{copy.error_message(&detail)}</p> }.into_any()
        }
        ListPhase::Empty => view! { <p class="list-status list-status--empty">{copy.empty}</p> }.into_any(),
        ListPhase::Items(_) => render(state.with(|s| s.items().to_vec())).into_any(),
    }
}
