//! # Client configuration: `l2top.toml` and the environment
//!
//! ```toml
//! [api]
//! base_url = "https://l2top.example/api"
//! timeout_secs = 30      # ignored on wasm32
//!
//! [ui]
//! locale = "ru"          # "ru" or "en"
//! ```
//!
//! | Source | Keys |
//! |--------|------|
//! | environment (native, `.env` via `dotenvy`) | `PORTAL_API_URL`, `PORTAL_API_TIMEOUT_SECS`, `PORTAL_LOCALE` |
//! | compile time (wasm32) | `PORTAL_API_URL`, `PORTAL_LOCALE` through `option_env!` |
//! | [`ApiConfig::from_toml`] | the file above |
//!
//! Every field has a default, so an empty file or an empty environment yields
//! [`ApiConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::i18n::Locale;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub locale: Locale,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: Locale::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    ui: UiSection,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ApiSection {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct UiSection {
    #[serde(default)]
    locale: Locale,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "l2top.toml"
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ApiError> {
        let file: ConfigFile =
            toml::from_str(s).map_err(|e| ApiError::Config(e.to_string()))?;
        let config = Self {
            base_url: file.api.base_url,
            timeout_secs: file.api.timeout_secs,
            locale: file.ui.locale,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        let file = ConfigFile {
            api: ApiSection {
                base_url: self.base_url.clone(),
                timeout_secs: self.timeout_secs,
            },
            ui: UiSection {
                locale: self.locale,
            },
        };
        toml::to_string_pretty(&file).map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Read the process environment, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::default().apply_vars(|key| std::env::var(key).ok())
    }

    /// Values baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ApiError> {
        Self::default().apply_vars(|key| match key {
            "PORTAL_API_URL" => option_env!("PORTAL_API_URL").map(String::from),
            "PORTAL_LOCALE" => option_env!("PORTAL_LOCALE").map(String::from),
            _ => None,
        })
    }

    /// `l2top.toml` from the working directory when present, with environment
    /// overrides on top.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        let base = match std::fs::read_to_string(Self::filename()) {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ApiError::Config(format!("{}: {e}", Self::filename()))),
        };
        base.apply_vars(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ApiError> {
        Self::from_env()
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        if let Some(url) = var("PORTAL_API_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(secs) = var("PORTAL_API_TIMEOUT_SECS") {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                ApiError::Config(format!("PORTAL_API_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        if let Some(locale) = var("PORTAL_LOCALE") {
            self.locale = locale.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ApiError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base url {}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ApiError::Config(format!("unsupported scheme: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ApiConfig::from_toml("").unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_toml_sections() {
        let config = ApiConfig::from_toml(
            r#"
[api]
base_url = "https://l2top.example/api"

[ui]
locale = "en"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://l2top.example/api");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.locale, Locale::En);

        let again = ApiConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::from_toml("[api]\nbase_url = \"not a url\"").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let err = ApiConfig::default()
            .with_base_url("ftp://files.example")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_vars_override_defaults() {
        let vars: HashMap<&str, &str> = [
            ("PORTAL_API_URL", "https://api.example/v1"),
            ("PORTAL_API_TIMEOUT_SECS", "5"),
            ("PORTAL_LOCALE", "en"),
        ]
        .into_iter()
        .collect();
        let config = ApiConfig::default()
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.base_url, "https://api.example/v1");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_bad_timeout_var() {
        let err = ApiConfig::default()
            .apply_vars(|key| (key == "PORTAL_API_TIMEOUT_SECS").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
