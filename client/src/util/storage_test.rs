use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v1");
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("absent");
    assert!(store.is_empty());
}

#[test]
fn load_json_round_trips_saved_value() {
    let store = MemoryStore::new();
    store.save_json("list", &vec![1, 2, 3]);
    assert_eq!(store.load_json::<Vec<i32>>("list"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_fails_soft_on_malformed_value() {
    let store = MemoryStore::new();
    store.set("user", "{not json");
    assert_eq!(store.load_json::<serde_json::Value>("user"), None);
}

#[test]
fn keys_are_sorted() {
    let store = MemoryStore::new();
    store.set("b", "1");
    store.set("a", "2");
    assert_eq!(store.keys(), vec!["a".to_owned(), "b".to_owned()]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = LocalStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
