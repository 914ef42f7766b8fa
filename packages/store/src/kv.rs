/// Synchronous string key-value storage.
///
/// Mirrors the `window.localStorage` contract: string keys, string values,
/// reads of absent keys yield `None`, writes overwrite unconditionally.
/// Implementations must be cheap to clone; the app hands clones to every
/// component that persists anything. Implementations live in sibling modules
/// ([`crate::memory`], [`crate::web`]).
pub trait KvStore: Clone {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
