//! Platform storage for the credential slots.
//!
//! - **Web** (WASM + `web` feature): durable = `localStorage`, session = `sessionStorage`
//! - **Native**: durable = files under `<data_dir>/l2top/`, session = process memory

use std::sync::Arc;

use store::CredentialStore;

/// Create the platform-appropriate credential store.
pub fn make_credentials() -> CredentialStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        CredentialStore::new(
            Arc::new(store::WebStorageSlot::local()),
            Arc::new(store::WebStorageSlot::session()),
        )
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        CredentialStore::new(
            Arc::new(store::MemorySlot::new()),
            Arc::new(store::MemorySlot::new()),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("l2top");
        CredentialStore::new(
            Arc::new(store::FileSlot::new(base)),
            Arc::new(store::MemorySlot::new()),
        )
    }
}
