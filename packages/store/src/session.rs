//! # Persisted session snapshot
//!
//! The signed-in user and the authenticated flag are stored as one JSON
//! document under [`SESSION_KEY`] in the durable slot:
//!
//! ```json
//! {"state": {"user": {...}, "isAuthenticated": true}, "version": 1}
//! ```
//!
//! The token is deliberately absent; see [`crate::credentials`].
//! A snapshot with a different `version` or malformed JSON loads as `None`,
//! which the caller treats as "signed out".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::slot::StorageSlot;

/// Storage key of the session snapshot.
pub const SESSION_KEY: &str = "auth-store";

/// Current snapshot format version.
pub const SESSION_VERSION: u32 = 1;

/// The persisted part of the auth state. Generic over the user type so this
/// crate does not depend on the API models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession<U> {
    pub user: Option<U>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl<U> Default for PersistedSession<U> {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    version: u32,
}

impl<U: Serialize + DeserializeOwned> PersistedSession<U> {
    pub fn new(user: Option<U>, is_authenticated: bool) -> Self {
        Self {
            user,
            is_authenticated,
        }
    }

    /// Read the snapshot from `slot`.
    pub fn load(slot: &dyn StorageSlot) -> Option<Self> {
        let raw = slot.get(SESSION_KEY)?;
        let envelope: Envelope<Self> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Discarding unreadable session snapshot: {}", e);
                return None;
            }
        };
        if envelope.version != SESSION_VERSION {
            tracing::info!(
                "Discarding session snapshot version {} (expected {})",
                envelope.version,
                SESSION_VERSION
            );
            return None;
        }
        Some(envelope.state)
    }

    /// Write the snapshot to `slot`.
    pub fn save(&self, slot: &dyn StorageSlot) {
        let envelope = Envelope {
            state: self,
            version: SESSION_VERSION,
        };
        match serde_json::to_string(&envelope) {
            Ok(json) => slot.set(SESSION_KEY, &json),
            Err(e) => tracing::error!("Failed to serialize session snapshot: {}", e),
        }
    }

    /// Remove any stored snapshot.
    pub fn clear(slot: &dyn StorageSlot) {
        slot.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySlot;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestUser {
        id: u64,
        name: String,
    }

    #[test]
    fn test_save_and_load() {
        let slot = MemorySlot::new();
        let session = PersistedSession::new(
            Some(TestUser {
                id: 7,
                name: "admin".to_string(),
            }),
            true,
        );
        session.save(&slot);

        let loaded = PersistedSession::<TestUser>::load(&slot).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_snapshot_shape() {
        let slot = MemorySlot::new();
        PersistedSession::new(
            Some(TestUser {
                id: 1,
                name: "a".to_string(),
            }),
            true,
        )
        .save(&slot);

        let raw: serde_json::Value = serde_json::from_str(&slot.get(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["state"]["isAuthenticated"], true);
        assert_eq!(raw["state"]["user"]["id"], 1);
        assert!(raw["state"].get("token").is_none());
    }

    #[test]
    fn test_missing_or_bad_snapshot() {
        let slot = MemorySlot::new();
        assert!(PersistedSession::<TestUser>::load(&slot).is_none());

        slot.set(SESSION_KEY, "not json");
        assert!(PersistedSession::<TestUser>::load(&slot).is_none());

        slot.set(SESSION_KEY, r#"{"state":{"user":null,"isAuthenticated":true},"version":2}"#);
        assert!(PersistedSession::<TestUser>::load(&slot).is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let slot = MemorySlot::new();
        slot.set(SESSION_KEY, r#"{"state":{},"version":1}"#);

        let loaded = PersistedSession::<TestUser>::load(&slot).unwrap();
        assert_eq!(loaded, PersistedSession::default());
    }

    #[test]
    fn test_clear() {
        let slot = MemorySlot::new();
        PersistedSession::<TestUser>::new(None, false).save(&slot);
        PersistedSession::<TestUser>::clear(&slot);
        assert!(slot.get(SESSION_KEY).is_none());
    }
}
