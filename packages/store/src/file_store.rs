//! # Filesystem-backed storage slot
//!
//! [`FileSlot`] persists each key as one file under a base directory. It is
//! the durable slot on native builds, playing the role `localStorage` plays in
//! the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── auth-token        # raw token string
//! └── auth-store        # JSON session snapshot
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/l2top/` on Linux.

use std::path::PathBuf;

use crate::slot::StorageSlot;

/// Filesystem-backed StorageSlot for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileSlot {
    base: PathBuf,
}

impl FileSlot {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; never let one escape the base directory.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl StorageSlot for FileSlot {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create storage dir {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write storage key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove storage key {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("l2top"));

        assert!(slot.get("auth-token").is_none());
        slot.set("auth-token", "secret");

        // Re-open from same directory
        let reopened = FileSlot::new(dir.path().join("l2top"));
        assert_eq!(reopened.get("auth-token").as_deref(), Some("secret"));

        reopened.remove("auth-token");
        assert!(slot.get("auth-token").is_none());

        // Removing a missing key is a no-op
        reopened.remove("auth-token");
    }

    #[test]
    fn test_key_cannot_escape_base() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().to_path_buf());

        slot.set("../outside", "x");
        assert_eq!(slot.get("../outside").as_deref(), Some("x"));
        assert!(dir.path().join(".._outside").exists());
    }
}
