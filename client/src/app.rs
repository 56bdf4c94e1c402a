//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::navbar::Navbar;
use crate::config::FALLBACK_PATH;
use crate::pages::{
    courts::CourtsPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, matches::MatchesPage,
    register::RegisterPage, tournaments::TournamentsPage, users::UsersPage,
};
use crate::state::context::SessionContext;
use crate::state::ui::UiState;
use crate::util::auth::{RouteAccess, UNMATCHED_ROUTE_ACCESS};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the auth bootstrap, and
/// wraps every route in the guard for its access level.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::provide();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    session.init();

    // Runs after hydration only, so SSR markup never depends on storage.
    Effect::new(move || {
        let preference = theme::read_preference();
        theme::apply(preference);
        ui.update(|u| u.theme = preference);
        theme::watch_system(move || ui.get_untracked().theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/asopadel.css"/>
        <Title text="ASOPADEL Barinas"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| guarded(UNMATCHED_ROUTE_ACCESS, UnmatchedRedirect)>
                    <Route path=StaticSegment("") view=|| guarded(RouteAccess::Public, HomePage)/>
                    <Route path=StaticSegment("login") view=|| guarded(RouteAccess::Public, LoginPage)/>
                    <Route path=StaticSegment("register") view=|| guarded(RouteAccess::Public, RegisterPage)/>
                    <Route path=StaticSegment("dashboard") view=|| guarded(RouteAccess::Protected, DashboardPage)/>
                    <Route path=StaticSegment("torneos") view=|| guarded(RouteAccess::Protected, TournamentsPage)/>
                    <Route path=StaticSegment("canchas") view=|| guarded(RouteAccess::Protected, CourtsPage)/>
                    <Route path=StaticSegment("partidos") view=|| guarded(RouteAccess::Protected, MatchesPage)/>
                    <Route path=StaticSegment("usuarios") view=|| guarded(RouteAccess::AdminOnly, UsersPage)/>
                </Routes>
            </main>
        </Router>
    }
}

/// Sends unmatched paths to the fallback route.
#[component]
fn UnmatchedRedirect() -> impl IntoView {
    view! { <Redirect path=FALLBACK_PATH/> }
}

fn guarded<V: IntoView + 'static>(access: RouteAccess, page: fn() -> V) -> impl IntoView {
    view! { <Guarded access=access>{move || page()}</Guarded> }
}
