use super::*;

#[test]
fn memory_store_starts_absent() {
    let store = MemoryStore::new();
    assert_eq!(store.get(), None);
}

#[test]
fn set_persists_and_overwrites() {
    let store = MemoryStore::new();
    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    store.set("def");
    assert_eq!(store.get().as_deref(), Some("def"));
}

#[test]
fn clear_twice_is_same_as_once() {
    let store = MemoryStore::with_token("abc");
    store.clear();
    assert_eq!(store.get(), None);
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn browser_store_is_inert_without_a_browser() {
    let store = BrowserStore;
    store.set("abc");
    assert_eq!(store.get(), None);
    store.clear();
}
