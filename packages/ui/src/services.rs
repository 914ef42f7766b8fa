//! Platform wiring and context hooks.
//!
//! The app package picks the storage backend once, through [`AppKv`], and
//! provides the API client and the two stores as context. Components pull
//! them back out with the `use_*` hooks below instead of threading props.

use api::{ApiClient, Project};
use dioxus::prelude::*;
use store::{PrefStore, SessionStore};

/// Key-value backend for the current platform.
///
/// Web builds persist to localStorage; everything else (tests, native dev
/// shells) falls back to the in-memory store.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppKv = store::WebStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppKv = store::MemoryStore;

pub type Session = SessionStore<AppKv>;
pub type Prefs = PrefStore<AppKv>;

pub fn make_kv() -> AppKv {
    AppKv::new()
}

pub fn use_api() -> ApiClient {
    use_context()
}

pub fn use_session() -> Session {
    use_context()
}

pub fn use_prefs() -> Prefs {
    use_context()
}

/// Project list shared by the shell, the header selector and the views.
pub type ObjectsSignal = Signal<Vec<Project>>;

pub fn use_objects() -> ObjectsSignal {
    use_context()
}

/// Reload the shared project list. Views call this after any mutation so the
/// selector and sidebar pick the change up without a full page load.
pub async fn refresh_objects(api: &ApiClient, mut objects: ObjectsSignal) {
    match api.list_projects().await {
        Ok(list) => objects.set(list),
        Err(err) => tracing::warn!("project list refresh failed: {err}"),
    }
}
