//! # Bearer token storage
//!
//! The token lives outside the session snapshot so a logout can scrub it
//! without rewriting the rest of the session. It may sit in either of two
//! slots:
//!
//! | Slot | Browser backing | Written by |
//! |------|-----------------|------------|
//! | durable | `localStorage` | "remember me" logins and every social (OAuth) login |
//! | session | `sessionStorage` | logins that should end with the tab |
//!
//! [`CredentialStore::get_token`] reads durable first, then session; the first
//! non-empty value wins. [`CredentialStore::clear_token`] always clears both.

use std::fmt;
use std::sync::Arc;

use crate::memory::MemorySlot;
use crate::slot::StorageSlot;

/// Storage key for the bearer token in both slots.
pub const TOKEN_KEY: &str = "auth-token";

/// Which slot a newly issued token is written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Durable,
    Session,
}

/// The two token slots plus their precedence rules.
///
/// Cloning is cheap and clones share the same slots.
#[derive(Clone)]
pub struct CredentialStore {
    durable: Arc<dyn StorageSlot>,
    session: Arc<dyn StorageSlot>,
}

impl CredentialStore {
    pub fn new(durable: Arc<dyn StorageSlot>, session: Arc<dyn StorageSlot>) -> Self {
        Self { durable, session }
    }

    /// Both slots backed by fresh [`MemorySlot`]s.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySlot::new()), Arc::new(MemorySlot::new()))
    }

    /// The durable slot. The session snapshot is persisted here as well.
    pub fn durable(&self) -> &dyn StorageSlot {
        self.durable.as_ref()
    }

    /// The session-scoped slot.
    pub fn session(&self) -> &dyn StorageSlot {
        self.session.as_ref()
    }

    /// Current bearer token, durable slot first.
    pub fn get_token(&self) -> Option<String> {
        [self.durable.as_ref(), self.session.as_ref()]
            .into_iter()
            .filter_map(|slot| slot.get(TOKEN_KEY))
            .find(|token| !token.is_empty())
    }

    /// Write a token to the requested slot.
    pub fn set_token(&self, token: &str, persistence: Persistence) {
        match persistence {
            Persistence::Durable => self.durable.set(TOKEN_KEY, token),
            Persistence::Session => self.session.set(TOKEN_KEY, token),
        }
    }

    /// Remove the token from both slots.
    pub fn clear_token(&self) {
        self.durable.remove(TOKEN_KEY);
        self.session.remove(TOKEN_KEY);
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("has_token", &self.get_token().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_slots() -> (CredentialStore, MemorySlot, MemorySlot) {
        let durable = MemorySlot::new();
        let session = MemorySlot::new();
        let store = CredentialStore::new(Arc::new(durable.clone()), Arc::new(session.clone()));
        (store, durable, session)
    }

    #[test]
    fn test_durable_token_wins() {
        let (store, durable, session) = store_with_slots();
        durable.set(TOKEN_KEY, "durable-token");
        session.set(TOKEN_KEY, "session-token");

        assert_eq!(store.get_token().as_deref(), Some("durable-token"));
    }

    #[test]
    fn test_falls_back_to_session_token() {
        let (store, _durable, session) = store_with_slots();
        session.set(TOKEN_KEY, "session-token");

        assert_eq!(store.get_token().as_deref(), Some("session-token"));
    }

    #[test]
    fn test_empty_durable_value_is_skipped() {
        let (store, durable, session) = store_with_slots();
        durable.set(TOKEN_KEY, "");
        session.set(TOKEN_KEY, "session-token");

        assert_eq!(store.get_token().as_deref(), Some("session-token"));
    }

    #[test]
    fn test_no_token() {
        let (store, durable, _session) = store_with_slots();
        assert!(store.get_token().is_none());

        durable.set(TOKEN_KEY, "");
        assert!(store.get_token().is_none());
    }

    #[test]
    fn test_set_token_targets_slot() {
        let (store, durable, session) = store_with_slots();

        store.set_token("a", Persistence::Session);
        assert!(durable.get(TOKEN_KEY).is_none());
        assert_eq!(session.get(TOKEN_KEY).as_deref(), Some("a"));

        store.set_token("b", Persistence::Durable);
        assert_eq!(durable.get(TOKEN_KEY).as_deref(), Some("b"));
    }

    #[test]
    fn test_clear_token_clears_both_slots() {
        let (store, durable, session) = store_with_slots();
        durable.set(TOKEN_KEY, "a");
        session.set(TOKEN_KEY, "b");
        durable.set("auth-store", "{}");

        store.clear_token();

        assert!(durable.get(TOKEN_KEY).is_none());
        assert!(session.get(TOKEN_KEY).is_none());
        // Other keys are left alone
        assert_eq!(durable.get("auth-store").as_deref(), Some("{}"));
    }
}
