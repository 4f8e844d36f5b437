//! # Client-side persistence for the portal
//!
//! Everything the browser client keeps between page loads goes through this
//! crate. Storage is modelled as synchronous key/value [`StorageSlot`]s, the
//! same shape as the browser's `localStorage` / `sessionStorage`.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`slot`] | The [`StorageSlot`] trait. |
//! | [`credentials`] | [`CredentialStore`]: the bearer token in a durable and a session-scoped slot with a fixed read precedence. |
//! | [`session`] | [`PersistedSession`]: the versioned JSON snapshot of the signed-in user. |
//!
//! ## Slot implementations
//!
//! - [`MemorySlot`] - in-process map, used for tests and as the native session slot.
//! - [`FileSlot`] - one file per key under a base directory (desktop / native builds).
//! - [`WebStorageSlot`] - `window.localStorage` / `window.sessionStorage` (WASM + `web` feature).

pub mod credentials;
pub mod session;
pub mod slot;

mod memory;
pub use memory::MemorySlot;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileSlot;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::{StorageArea, WebStorageSlot};

pub use credentials::{CredentialStore, Persistence, TOKEN_KEY};
pub use session::{PersistedSession, SESSION_KEY, SESSION_VERSION};
pub use slot::StorageSlot;
