use super::*;
use crate::net::types::RoleFlags;

fn user(admin: bool) -> UserProfile {
    UserProfile {
        id: 7,
        cedula: "12345678".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: None,
        telefono: None,
        roles: RoleFlags { es_jugador: true, es_arbitro: false, es_admin_aso: admin },
    }
}

fn titles(entries: &[DashboardEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.title).collect()
}

#[test]
fn entries_for_player_hide_users_card() {
    assert_eq!(titles(&entries_for(Some(&user(false)))), vec!["Torneos", "Partidos", "Canchas"]);
}

#[test]
fn entries_for_admin_include_users_card() {
    let entries = entries_for(Some(&user(true)));
    assert_eq!(entries.last().map(|e| e.href), Some("/usuarios"));
    assert_eq!(entries.len(), 4);
}

#[test]
fn entries_without_user_hide_users_card() {
    assert_eq!(entries_for(None).len(), 3);
}
