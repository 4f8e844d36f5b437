//! # User model
//!
//! [`User`] is the signed-in account as returned by `GET /user` and by the
//! OAuth callback. It is also what the session snapshot persists, so it
//! derives `Serialize + Deserialize + PartialEq`.
//!
//! [`ChangeUserPassword`] is the body of `POST /user/password`; its
//! client-side validation lives in [`crate::forms`].

use serde::{Deserialize, Serialize};

/// An authenticated portal user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Avatar URL, falling back to the bundled placeholder.
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or("/avatar.png")
    }
}

/// Body of a password change request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeUserPassword {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

/// Response of `GET /auth/callback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCallbackResponse {
    pub access_token: String,
    pub user: User,
}
