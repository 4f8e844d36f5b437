use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::slot::StorageSlot;

/// In-memory StorageSlot for testing and the native session slot.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageSlot for MemorySlot {
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
    fn test_set_get_remove() {
        let slot = MemorySlot::new();
        assert!(slot.get("auth-token").is_none());

        slot.set("auth-token", "abc");
        assert_eq!(slot.get("auth-token").as_deref(), Some("abc"));

        slot.set("auth-token", "def");
        assert_eq!(slot.get("auth-token").as_deref(), Some("def"));
        assert_eq!(slot.len(), 1);

        slot.remove("auth-token");
        assert!(slot.get("auth-token").is_none());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let slot = MemorySlot::new();
        let other = slot.clone();

        other.set("k", "v");
        assert_eq!(slot.get("k").as_deref(), Some("v"));
    }
}
