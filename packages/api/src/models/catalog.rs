use serde::{Deserialize, Serialize};

/// Game-version tag attached to a server (e.g. "Interlude", "High Five").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chronicle {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Game-speed multiplier tag (e.g. "x5").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: u64,
    pub name: String,
}

impl Rate {
    /// The numeric part of the rate name, as used in filters and queries:
    /// `"x5"` → `"5"`.
    pub fn key(&self) -> String {
        rate_key(&self.name)
    }
}

/// Strip the leading multiplier sign from a rate label.
pub(crate) fn rate_key(name: &str) -> String {
    name.trim().replacen('x', "", 1)
}
