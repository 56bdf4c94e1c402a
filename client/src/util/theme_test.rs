use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn parse_accepts_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
    assert_eq!(Theme::parse("auto"), Some(Theme::Auto));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn next_cycles_through_all_three() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::Auto);
    assert_eq!(Theme::Auto.next(), Theme::Light);
}

#[test]
fn resolve_auto_follows_system() {
    assert_eq!(Theme::Auto.resolve(true), Theme::Dark);
    assert_eq!(Theme::Auto.resolve(false), Theme::Light);
    assert_eq!(Theme::Light.resolve(true), Theme::Light);
    assert_eq!(Theme::Dark.resolve(false), Theme::Dark);
}

#[test]
fn load_defaults_to_auto() {
    let store = MemoryStore::new();
    assert_eq!(load(&store), Theme::Auto);
    store.set("theme", "neon");
    assert_eq!(load(&store), Theme::Auto);
}

#[test]
fn save_then_load_returns_stored_theme() {
    let store = MemoryStore::new();
    save(&store, Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(load(&store), Theme::Dark);
}

#[test]
fn only_auto_follows_system_changes() {
    assert!(follows_system(Theme::Auto));
    assert!(!follows_system(Theme::Light));
    assert!(!follows_system(Theme::Dark));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_advances_outside_browser() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(read_preference(), Theme::Auto);
    apply(Theme::Dark);
    watch_system(|| Theme::Auto);
}
