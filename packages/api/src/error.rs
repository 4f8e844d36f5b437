//! Errors returned by the API client.

use thiserror::Error;

use crate::i18n::{Locale, Message};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a call through [`crate::ApiClient`].
///
/// Clone + PartialEq so it can sit in Dioxus signals and be compared in
/// tests; underlying library errors are flattened to strings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// HTTP 401. Both token slots have already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The message shown to the user.
    pub fn message(&self) -> Message {
        match self {
            ApiError::Unauthorized => Message::AuthorizationError,
            _ => Message::LoadingError,
        }
    }

    pub fn localized(&self, locale: Locale) -> &'static str {
        self.message().text(locale)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
