//! Route wrapper applying the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view in `App` is wrapped in `Guarded`, so while the bootstrap
//! is running the whole app shows the same single loading indicator and no
//! route shows the login screen too early.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::context::SessionContext;
use crate::util::auth::{GuardDecision, RouteAccess, decide, install_route_guard};

/// Render `children` only when the guard allows it for `access`.
#[component]
pub fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::expect();
    let decision = Memo::new(move |_| decide(&session.state.get(), access));
    install_route_guard(decision, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="app-loading">
                        <p>
                            {move || match decision.get() {
                                GuardDecision::Redirect(_) => "Redirigiendo...",
                                GuardDecision::Defer | GuardDecision::Render => "Cargando...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
