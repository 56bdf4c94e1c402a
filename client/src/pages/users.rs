//! Association members table (admin only).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::list_view::list_body;
use crate::net::api::Collection;
use crate::net::types::{Role, UserProfile};
use crate::state::lists::ListCopy;
use crate::util::collection::use_collection;

/// Comma-separated role labels, or a dash when the user has none.
pub fn role_labels(user: &UserProfile) -> String {
    let labels: Vec<&str> = user.roles.roles().into_iter().map(Role::label).collect();
    if labels.is_empty() { "-".to_owned() } else { labels.join(", ") }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let copy = ListCopy::for_collection(Collection::Users);
    let state = use_collection::<UserProfile>(Collection::Users);

    view! {
        <section class="page">
            <h1 class="page__title">{copy.title}</h1>
            {list_body(state, copy, |items| {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Cédula"</th>
                                <th>"Nombre"</th>
                                <th>"Correo"</th>
                                <th>"Teléfono"</th>
                                <th>"Roles"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items
                                .into_iter()
                                .map(|user| {
                                    let roles = role_labels(&user);
                                    let name = user.full_name();
                                    let phone = user.telefono.clone().unwrap_or_else(|| "-".to_owned());
                                    view! {
                                        <tr>
                                            <td>{user.cedula}</td>
                                            <td>{name}</td>
                                            <td>{user.email}</td>
                                            <td>{phone}</td>
                                            <td>{roles}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </section>
    }
}
