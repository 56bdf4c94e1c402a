use super::*;
use crate::net::types::RoleFlags;

fn user(admin: bool) -> UserProfile {
    UserProfile {
        id: 1,
        cedula: "12345678".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: None,
        telefono: None,
        roles: RoleFlags { es_jugador: true, es_arbitro: false, es_admin_aso: admin },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user().is_none());
}

#[test]
fn anonymous_has_no_user() {
    let state = AuthState::Anonymous;
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn authenticated_exposes_user() {
    let state = AuthState::Authenticated(user(false));
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.cedula.as_str()), Some("12345678"));
    assert!(!state.is_admin());
}

#[test]
fn admin_flag_requires_authenticated_admin() {
    assert!(AuthState::Authenticated(user(true)).is_admin());
    assert!(!AuthState::Loading.is_admin());
}
