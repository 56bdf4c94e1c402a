//! Top navigation bar shared by every route.
//!
//! The users link is gated on the association-admin flag; login/logout and
//! the theme toggle follow the session and UI contexts.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;
use crate::state::context::SessionContext;
use crate::state::ui::UiState;

/// Right-hand account area of the navbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountSlot {
    Hidden,
    SignIn,
    /// Display name of the signed-in user.
    SignedIn(String),
}

pub fn account_slot(state: &AuthState) -> AccountSlot {
    match state {
        AuthState::Loading => AccountSlot::Hidden,
        AuthState::Anonymous => AccountSlot::SignIn,
        AuthState::Authenticated(user) => AccountSlot::SignedIn(user.display_name().to_owned()),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = SessionContext::expect();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_admin = move || session.state.get().is_admin();

    let on_logout = move |_| session.logout(LOGIN_PATH);
    let close_menu = move |_| ui.update(|u| u.menu_open = false);

    view! {
        <Show when=move || !session.state.get().is_loading()>
            <nav class="navbar">
                <A href=HOME_PATH attr:class="navbar__brand">
                    "ASOPADEL"
                </A>
                <button
                    class="navbar__menu-toggle"
                    aria-label="Menú"
                    on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
                >
                    "☰"
                </button>
                <div class="navbar__links" class:navbar__links--open=move || ui.get().menu_open on:click=close_menu>
                    <A href="/torneos" attr:class="navbar__link">
                        "Torneos"
                    </A>
                    <A href="/partidos" attr:class="navbar__link">
                        "Partidos"
                    </A>
                    <A href="/canchas" attr:class="navbar__link">
                        "Canchas"
                    </A>
                    <Show when=is_admin>
                        <A href="/usuarios" attr:class="navbar__link">
                            "Usuarios"
                        </A>
                    </Show>
                </div>

                <span class="navbar__spacer"></span>

                <button
                    class="btn navbar__theme-toggle"
                    on:click=move |_| {
                        let next = crate::util::theme::toggle(ui.get().theme);
                        ui.update(|u| u.theme = next);
                    }
                    title=move || format!("Tema: {}", ui.get().theme.as_str())
                >
                    {move || ui.get().theme.icon()}
                </button>

                {move || match account_slot(&session.state.get()) {
                    AccountSlot::SignIn => {
                        view! {
                            <span class="btn btn--light">
                                <A href=LOGIN_PATH>"Iniciar Sesión"</A>
                            </span>
                        }
                            .into_any()
                    }
                    AccountSlot::SignedIn(name) => {
                        view! {
                            <span class="navbar__self">{name}</span>
                            <button class="btn btn--light navbar__logout" on:click=on_logout>
                                "Salir"
                            </button>
                        }
                            .into_any()
                    }
                    AccountSlot::Hidden => ().into_any(),
                }}
            </nav>
        </Show>
    }
}
