//! # Session store: token and cached user
//!
//! [`SessionStore`] wraps a [`KvStore`] with the two values that make a browser
//! session survive a reload:
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `prorab.token` | bearer token string | Replayed as `Authorization: Bearer …` on every request |
//! | `prorab.user` | JSON-serialised user record | Display fallback while the session restore request is in flight |
//!
//! The cached user is never trusted for authorization decisions; on startup
//! the app re-validates the token against the backend and replaces the cache
//! with the server's answer. A rejected token clears both keys.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KvStore;

const TOKEN_KEY: &str = "prorab.token";
const USER_KEY: &str = "prorab.user";

#[derive(Clone, Debug)]
pub struct SessionStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn token(&self) -> Option<String> {
        self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.kv.set(TOKEN_KEY, token);
    }

    /// Cached user record from the last successful login/restore.
    ///
    /// A corrupt or stale payload reads as `None`, same as nothing stored.
    pub fn cached_user<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.kv.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn cache_user<T: Serialize>(&self, user: &T) {
        if let Ok(json) = serde_json::to_string(user) {
            self.kv.set(USER_KEY, &json);
        }
    }

    /// Drop the whole session: token and cached user, unconditionally.
    pub fn clear(&self) {
        self.kv.remove(TOKEN_KEY);
        self.kv.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct FakeUser {
        id: i64,
        username: String,
    }

    fn session() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn test_token_roundtrip() {
        let s = session();
        assert!(s.token().is_none());

        s.set_token("abc123");
        assert_eq!(s.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let s = session();
        s.set_token("");
        assert!(s.token().is_none());
    }

    #[test]
    fn test_user_cache_roundtrip() {
        let s = session();
        let user = FakeUser {
            id: 7,
            username: "vasya".to_string(),
        };

        s.cache_user(&user);
        assert_eq!(s.cached_user::<FakeUser>(), Some(user));
    }

    #[test]
    fn test_corrupt_user_cache_reads_as_none() {
        let kv = MemoryStore::new();
        kv.set("prorab.user", "{not json");
        let s = SessionStore::new(kv);
        assert!(s.cached_user::<FakeUser>().is_none());
    }

    #[test]
    fn test_clear_removes_token_and_user() {
        let s = session();
        s.set_token("abc123");
        s.cache_user(&FakeUser {
            id: 1,
            username: "u".to_string(),
        });

        s.clear();

        assert!(s.token().is_none());
        assert!(s.cached_user::<FakeUser>().is_none());
    }
}
