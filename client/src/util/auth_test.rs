use super::*;
use crate::net::types::{RoleFlags, UserProfile};

fn authenticated(admin: bool) -> AuthState {
    AuthState::Authenticated(UserProfile {
        id: 1,
        cedula: "12345678".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: None,
        telefono: None,
        roles: RoleFlags { es_jugador: !admin, es_arbitro: false, es_admin_aso: admin },
    })
}

#[test]
fn protected_route_while_anonymous_redirects_to_login() {
    assert_eq!(decide(&AuthState::Anonymous, RouteAccess::Protected), GuardDecision::Redirect("/login"));
}

#[test]
fn protected_route_while_authenticated_renders() {
    assert_eq!(decide(&authenticated(false), RouteAccess::Protected), GuardDecision::Render);
}

#[test]
fn public_route_renders_for_anyone_settled() {
    assert_eq!(decide(&AuthState::Anonymous, RouteAccess::Public), GuardDecision::Render);
    assert_eq!(decide(&authenticated(false), RouteAccess::Public), GuardDecision::Render);
}

#[test]
fn loading_defers_every_route() {
    for access in [RouteAccess::Public, RouteAccess::Protected, RouteAccess::AdminOnly] {
        assert_eq!(decide(&AuthState::Loading, access), GuardDecision::Defer);
    }
}

#[test]
fn admin_route_requires_admin_role() {
    assert_eq!(decide(&authenticated(true), RouteAccess::AdminOnly), GuardDecision::Render);
    assert_eq!(decide(&authenticated(false), RouteAccess::AdminOnly), GuardDecision::Redirect("/dashboard"));
    assert_eq!(decide(&AuthState::Anonymous, RouteAccess::AdminOnly), GuardDecision::Redirect("/login"));
}

#[test]
fn unmatched_route_redirect_waits_for_bootstrap() {
    assert_eq!(decide(&AuthState::Loading, UNMATCHED_ROUTE_ACCESS), GuardDecision::Defer);
    assert_eq!(decide(&AuthState::Anonymous, UNMATCHED_ROUTE_ACCESS), GuardDecision::Render);
    assert_eq!(decide(&authenticated(false), UNMATCHED_ROUTE_ACCESS), GuardDecision::Render);
}
