//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the API location is
//! baked in at compile time from `INVENTORY_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

/// API base URL used when `INVENTORY_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Persistent storage key holding the access token.
pub const CREDENTIAL_KEY: &str = "access_token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api base url is empty")]
    EmptyBaseUrl,
    #[error("api base url must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Settings shared by the credential store and the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub credential_key: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            credential_key: CREDENTIAL_KEY,
        }
    }
}

impl ClientConfig {
    /// Build a config for an explicit API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is blank or not http(s).
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(raw)?,
            ..Self::default()
        })
    }

    /// Read `INVENTORY_API_URL` captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the captured value is invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("INVENTORY_API_URL") {
            Some(raw) => Self::with_base_url(raw),
            None => Ok(Self::default()),
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}
