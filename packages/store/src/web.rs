//! # localStorage store: browser-side persistence
//!
//! [`WebStore`] is the [`KvStore`] implementation used on the **web platform**.
//! It reads and writes `window.localStorage` directly via [`web_sys`], which is
//! all the persistence this client needs: a session token, a cached user record,
//! and a couple of small UI preferences.
//!
//! ## Error handling
//!
//! Every operation silently swallows failures (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled, a full quota, or
//! a privacy mode that rejects writes degrades to "nothing stored" rather than
//! crashing the UI. The authoritative state always lives on the backend; losing
//! local storage only costs the user a re-login.

use crate::kv::KvStore;

/// localStorage-backed KvStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the `Storage` handle is re-acquired from
/// `window` on every call because `web_sys::Storage` is not `Send`/`Clone`
/// across component boundaries, and the lookup is cheap.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KvStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
