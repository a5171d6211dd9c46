use super::*;

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("carrito").unwrap(), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("carrito", "[]").unwrap();
    assert_eq!(storage.get("carrito").unwrap().as_deref(), Some("[]"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn memory_storage_remove_clears_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
    // Removing again is fine.
    storage.remove("k").unwrap();
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn memory_storage_quota_rejects_oversized_write() {
    let storage = MemoryStorage::with_quota(8);
    storage.set("k", "1234").unwrap();
    let err = storage.set("k", "123456789").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "k"));
    // Previous value survives the failed write.
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("1234"));
}

#[test]
fn memory_storage_quota_counts_other_keys() {
    let storage = MemoryStorage::with_quota(10);
    storage.set("a", "1234").unwrap();
    assert!(storage.set("b", "12345").is_err());
    storage.set("b", "123").unwrap();
}

#[test]
fn boxed_backend_delegates() {
    let inner = MemoryStorage::new();
    let boxed: Box<dyn KeyValueStore> = Box::new(inner.clone());
    boxed.set("k", "v").unwrap();
    assert_eq!(inner.get("k").unwrap().as_deref(), Some("v"));
    boxed.remove("k").unwrap();
    assert_eq!(boxed.get("k").unwrap(), None);
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "carrito".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write carrito: QuotaExceededError");
}
