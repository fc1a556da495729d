//! Access-token persistence for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gates call [`CredentialStore::read`] on every navigation. Reading
//! also pushes the token into the HTTP client's default headers, so requests
//! stay authenticated after a page reload without another login. Re-applying
//! an unchanged token is idempotent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::config::ClientConfig;
use crate::net::api::{ApiClient, BearerSink};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Opaque access token. Only its presence matters to navigation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token; an empty token counts as no credential.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() { None } else { Some(Self(token)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Reads and writes the single persisted credential.
#[derive(Clone, Debug)]
pub struct CredentialStore<S, H> {
    storage: S,
    http: H,
    key: &'static str,
}

/// Credential store backed by `localStorage` feeding the shared API client.
pub type BrowserSession = CredentialStore<LocalStorage, ApiClient>;

impl BrowserSession {
    pub fn browser(config: &ClientConfig) -> Self {
        CredentialStore::new(LocalStorage, ApiClient::new(config), config.credential_key)
    }
}

impl<S, H> CredentialStore<S, H>
where
    S: KeyValueStore,
    H: BearerSink,
{
    pub fn new(storage: S, http: H, key: &'static str) -> Self {
        Self { storage, http, key }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Load the stored credential, re-applying it to the HTTP client when present.
    pub fn read(&self) -> Option<Credential> {
        let credential = self.storage.get(self.key).and_then(Credential::new)?;
        self.http.set_credential(Some(credential.as_str()));
        Some(credential)
    }

    /// Persist `token` and attach it to subsequent requests.
    ///
    /// An empty token behaves like [`CredentialStore::clear`].
    pub fn write(&self, token: &str) {
        let Some(credential) = Credential::new(token) else {
            self.clear();
            return;
        };
        self.storage.set(self.key, credential.as_str());
        self.http.set_credential(Some(credential.as_str()));
        log::info!("session credential stored");
    }

    pub fn clear(&self) {
        self.storage.remove(self.key);
        self.http.set_credential(None);
        log::info!("session credential cleared");
    }

    pub fn has_credential(&self) -> bool {
        self.read().is_some()
    }
}
