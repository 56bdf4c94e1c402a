use super::*;
use crate::net::types::{RoleFlags, UserProfile};

fn signed_in(first_name: &str) -> AuthState {
    AuthState::Authenticated(UserProfile {
        id: 3,
        cedula: "20111222".to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Rojas".to_owned(),
        email: "luis@example.com".to_owned(),
        full_name: None,
        telefono: None,
        roles: RoleFlags::default(),
    })
}

#[test]
fn account_slot_hidden_while_loading() {
    assert_eq!(account_slot(&AuthState::Loading), AccountSlot::Hidden);
}

#[test]
fn account_slot_offers_sign_in_when_anonymous() {
    assert_eq!(account_slot(&AuthState::Anonymous), AccountSlot::SignIn);
}

#[test]
fn account_slot_shows_first_name_or_cedula() {
    assert_eq!(account_slot(&signed_in("Luis")), AccountSlot::SignedIn("Luis".to_owned()));
    assert_eq!(account_slot(&signed_in("")), AccountSlot::SignedIn("20111222".to_owned()));
}
