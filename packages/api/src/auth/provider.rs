use std::fmt;

use serde::{Deserialize, Serialize};

/// OAuth provider named in the callback URL (`?provider=...`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provider(String);

impl Provider {
    pub const DEFAULT: &'static str = "discord";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Provider from an optional query parameter; missing or blank means discord.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// Split the query string of the OAuth callback URL into decoded pairs.
pub fn callback_params(query: &str) -> Vec<(String, String)> {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return Vec::new();
    }
    match reqwest::Url::parse(&format!("http://localhost/?{query}")) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(e) => {
            tracing::warn!("unreadable callback query: {e}");
            Vec::new()
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
