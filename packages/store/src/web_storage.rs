//! # Browser Storage slots
//!
//! [`WebStorageSlot`] wraps `window.localStorage` (durable) or
//! `window.sessionStorage` (session-scoped) through `web-sys`.
//!
//! Each operation looks the storage object up again from `window`, so the
//! slot is a plain `Copy` value that can live in any context. If the storage
//! area is unavailable (private mode, sandboxed iframe) reads return `None`
//! and writes are dropped with a warning.

use crate::slot::StorageSlot;

/// Which browser storage area a slot uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

#[derive(Clone, Copy, Debug)]
pub struct WebStorageSlot {
    area: StorageArea,
}

impl WebStorageSlot {
    /// `window.localStorage`.
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    /// `window.sessionStorage`.
    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl StorageSlot for WebStorageSlot {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("{:?} storage unavailable, dropping write to {}", self.area, key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to {:?} storage", key, self.area);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
