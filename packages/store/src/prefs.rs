//! UI preferences that live only in the browser.
//!
//! Two independent values, both cosmetic: the tenant display name the admin
//! can type into the header (never synced to the backend), and the id of the
//! last construction object the user had open, so object-scoped pages keep
//! working after a reload on a URL that names no object.

use crate::kv::KvStore;

const LOGO_KEY: &str = "prorab.logo";
const LAST_OBJECT_KEY: &str = "prorab.last_object";

#[derive(Clone, Debug)]
pub struct PrefStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> PrefStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Tenant display name override, if the admin ever set one.
    pub fn logo(&self) -> Option<String> {
        self.kv.get(LOGO_KEY).filter(|v| !v.is_empty())
    }

    /// Commit a new display name. An empty or whitespace-only name clears the
    /// override so the default title shows again.
    pub fn set_logo(&self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.kv.remove(LOGO_KEY);
        } else {
            self.kv.set(LOGO_KEY, name);
        }
    }

    pub fn last_object(&self) -> Option<i64> {
        self.kv.get(LAST_OBJECT_KEY)?.parse().ok()
    }

    pub fn set_last_object(&self, id: i64) {
        self.kv.set(LAST_OBJECT_KEY, &id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn prefs() -> PrefStore<MemoryStore> {
        PrefStore::new(MemoryStore::new())
    }

    #[test]
    fn test_logo_roundtrip() {
        let p = prefs();
        assert!(p.logo().is_none());

        p.set_logo("СтройМонтаж");
        assert_eq!(p.logo().as_deref(), Some("СтройМонтаж"));
    }

    #[test]
    fn test_logo_trims_and_clears_on_empty() {
        let p = prefs();
        p.set_logo("  Brigada  ");
        assert_eq!(p.logo().as_deref(), Some("Brigada"));

        p.set_logo("   ");
        assert!(p.logo().is_none());
    }

    #[test]
    fn test_last_object_roundtrip() {
        let p = prefs();
        assert!(p.last_object().is_none());

        p.set_last_object(42);
        assert_eq!(p.last_object(), Some(42));
    }

    #[test]
    fn test_garbage_last_object_reads_as_none() {
        let kv = MemoryStore::new();
        kv.set("prorab.last_object", "not-a-number");
        let p = PrefStore::new(kv);
        assert!(p.last_object().is_none());
    }

    #[test]
    fn test_prefs_are_independent() {
        let p = prefs();
        p.set_logo("Name");
        p.set_last_object(3);

        p.set_logo("");
        assert_eq!(p.last_object(), Some(3));
    }
}
