//! # Store crate: client-side persistence
//!
//! A thin key-value layer over localStorage (in-memory for tests and native
//! builds), plus the two typed stores the app keeps on top of it: the
//! session (token and cached user) and a handful of UI preferences.

pub mod kv;
pub mod prefs;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStore;

pub use kv::KvStore;
pub use prefs::PrefStore;
pub use session::SessionStore;
