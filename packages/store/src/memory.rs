use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KvStore;

/// In-memory KvStore for tests and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("nothing").is_none());
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();
        store.set("k", "first");
        store.set("k", "second");
        assert_eq!(store.get("k").as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("k", "v");
        store.remove("k");
        assert!(store.get("k").is_none());

        // Removing an absent key is a no-op
        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
