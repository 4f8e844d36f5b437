//! Synchronous key/value storage.

/// A single key/value storage area.
///
/// Mirrors the browser Storage API: reads return `None` when the key is
/// missing or the backend is unavailable, writes never fail from the
/// caller's point of view. Implementations log and swallow backend errors.
pub trait StorageSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
