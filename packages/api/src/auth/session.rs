//! # Auth session
//!
//! [`AuthSession`] owns the signed-in user, the bearer token and the
//! authenticated flag. It is an ordinary value created at startup with
//! [`AuthSession::restore`] and handed to the UI as context; nothing about it
//! is global.
//!
//! Persistence is split in two:
//!
//! | What | Where |
//! |------|-------|
//! | user + `isAuthenticated` | [`PersistedSession`] under `auth-store` in the durable slot |
//! | token | [`CredentialStore`], durable or session slot |
//!
//! Whenever a token is held, `is_authenticated` is `true`. Writes are
//! fire-and-forget: storage failures are logged by the slots and otherwise
//! ignored.

use store::{CredentialStore, PersistedSession, Persistence};

use crate::models::{AuthCallbackResponse, User};

/// Plain snapshot of the session, cheap to clone into UI state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[derive(Clone)]
pub struct AuthSession {
    state: AuthState,
    credentials: CredentialStore,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("user", &self.state.user)
            .field("has_token", &self.state.token.is_some())
            .field("is_authenticated", &self.state.is_authenticated)
            .finish()
    }
}

impl AuthSession {
    /// An empty, signed-out session over `credentials`.
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            state: AuthState::default(),
            credentials,
        }
    }

    /// Rebuild the session from the stored snapshot and token.
    pub fn restore(credentials: CredentialStore) -> Self {
        let snapshot =
            PersistedSession::<User>::load(credentials.durable()).unwrap_or_default();
        let token = credentials.get_token();
        let is_authenticated = snapshot.is_authenticated || token.is_some();
        tracing::debug!(
            user = snapshot.user.as_ref().map(|u| u.id),
            has_token = token.is_some(),
            "auth session restored"
        );
        Self {
            state: AuthState {
                user: snapshot.user,
                token,
                is_authenticated,
            },
            credentials,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Sign in, keeping the token in the durable slot.
    pub fn login(&mut self, user: User, token: String) {
        self.login_with(user, token, Persistence::Durable);
    }

    pub fn login_with(&mut self, user: User, token: String, persistence: Persistence) {
        tracing::info!(user = user.id, ?persistence, "login");
        self.credentials.set_token(&token, persistence);
        self.state = AuthState {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        };
        self.persist();
    }

    /// Sign in from an OAuth callback. Social logins are always remembered.
    pub fn login_from_callback(&mut self, response: AuthCallbackResponse) {
        self.login(response.user, response.access_token);
    }

    /// Clear both token slots and reset the state.
    pub fn logout(&mut self) {
        tracing::info!("logout");
        self.credentials.clear_token();
        self.state = AuthState::default();
        self.persist();
    }

    /// Replace the in-memory token only. Storage is left alone.
    pub fn set_token(&mut self, token: Option<String>) {
        if token.is_some() {
            self.state.is_authenticated = true;
        }
        self.state.token = token;
    }

    /// Replace the stored user, e.g. after an avatar upload.
    pub fn set_user(&mut self, user: User) {
        self.state.user = Some(user);
        self.persist();
    }

    /// Reconcile with the credential slots after the client saw a 401: if the
    /// token is gone from storage, the session is signed out.
    pub fn sync_with_credentials(&mut self) -> bool {
        if self.state.token.is_some() && self.credentials.get_token().is_none() {
            tracing::warn!("stored token was revoked, signing out");
            self.state = AuthState::default();
            self.persist();
            return true;
        }
        false
    }

    /// Write the snapshot (without the token) to the durable slot.
    pub fn persist(&self) {
        PersistedSession::new(self.state.user.clone(), self.state.is_authenticated)
            .save(self.credentials.durable());
    }
}
