use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.read(), None);
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryTokenStore::new();
    store.write("tok-1");
    assert_eq!(store.read().as_deref(), Some("tok-1"));
}

#[test]
fn memory_store_write_replaces_previous_value() {
    let store = MemoryTokenStore::with_token("old");
    store.write("new");
    assert_eq!(store.read().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("tok-1");
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn memory_store_clear_when_empty_is_noop() {
    let store = MemoryTokenStore::new();
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// BrowserTokenStore outside a browser
// =============================================================

#[test]
fn browser_store_without_medium_reads_none() {
    let store = BrowserTokenStore::new();
    assert_eq!(store.read(), None);
}

#[test]
fn browser_store_without_medium_write_and_clear_do_not_panic() {
    let store = BrowserTokenStore::new();
    store.write("tok-1");
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Operation("QuotaExceededError".to_owned()).to_string(),
        "storage operation failed: QuotaExceededError"
    );
}
