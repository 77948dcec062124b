use super::*;

// =============================================================
// Round-trip
// =============================================================

#[test]
fn store_then_read_returns_exact_values() {
    let tokens = TokenStore::in_memory();
    tokens.store("A1", "R1");

    assert_eq!(tokens.access().as_deref(), Some("A1"));
    assert_eq!(tokens.refresh().as_deref(), Some("R1"));
}

#[test]
fn store_overwrites_previous_pair() {
    let tokens = TokenStore::in_memory();
    tokens.store("A1", "R1");
    tokens.store("A2", "R2");

    assert_eq!(tokens.access().as_deref(), Some("A2"));
    assert_eq!(tokens.refresh().as_deref(), Some("R2"));
}

#[test]
fn clear_removes_both_values() {
    let tokens = TokenStore::in_memory();
    tokens.store("A1", "R1");
    tokens.clear();

    assert!(tokens.access().is_none());
    assert!(tokens.refresh().is_none());
}

#[test]
fn empty_store_reads_none() {
    let tokens = TokenStore::in_memory();
    assert!(tokens.access().is_none());
    assert!(tokens.refresh().is_none());
}

// =============================================================
// Clones share the backend
// =============================================================

#[test]
fn clones_observe_the_same_backend() {
    let tokens = TokenStore::in_memory();
    let other = tokens.clone();

    tokens.store("A1", "R1");
    assert_eq!(other.access().as_deref(), Some("A1"));

    other.clear();
    assert!(tokens.access().is_none());
}

#[test]
fn null_backend_drops_writes() {
    let store = TokenStore { backend: std::rc::Rc::new(NullBackend) };
    store.store("A1", "R1");
    assert!(store.access().is_none());
    assert!(store.refresh().is_none());
}
