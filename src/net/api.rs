//! HTTP client for the inventory API.
//!
//! Client-side (csr): requests are built with `gloo-net` and carry the
//! client's default headers.
//! Native builds (tests): only header bookkeeping and URL joining exist.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential store pushes the access token in through [`BearerSink`];
//! everything sent afterwards carries `Authorization: Bearer <token>` until the
//! credential is cleared.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::ClientConfig;

pub const AUTHORIZATION: &str = "Authorization";

/// Capability to attach or clear a bearer credential on outgoing requests.
pub trait BearerSink {
    /// `Some(token)` sets `Authorization: Bearer <token>`; `None` removes the
    /// header key entirely.
    fn set_credential(&self, token: Option<&str>);
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Shared API client. Clones share one default header map.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    headers: Arc<RwLock<BTreeMap<String, String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            headers: Arc::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn default_header(&self, name: &str) -> Option<String> {
        let headers = self.headers.read().unwrap_or_else(PoisonError::into_inner);
        headers.get(name).cloned()
    }

    /// Snapshot of the headers attached to every request.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        let headers = self.headers.read().unwrap_or_else(PoisonError::into_inner);
        headers.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Thread every default header through `builder` via `set_header`.
    pub fn apply_defaults<B, F>(&self, builder: B, set_header: F) -> B
    where
        F: Fn(B, &str, &str) -> B,
    {
        self.default_headers()
            .iter()
            .fold(builder, |builder, (name, value)| set_header(builder, name, value))
    }

    #[cfg(feature = "csr")]
    pub fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.with_defaults(gloo_net::http::Request::get(&self.url(path)))
    }

    #[cfg(feature = "csr")]
    pub fn post(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.with_defaults(gloo_net::http::Request::post(&self.url(path)))
    }

    #[cfg(feature = "csr")]
    pub fn delete(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.with_defaults(gloo_net::http::Request::delete(&self.url(path)))
    }

    #[cfg(feature = "csr")]
    fn with_defaults(
        &self,
        builder: gloo_net::http::RequestBuilder,
    ) -> gloo_net::http::RequestBuilder {
        self.apply_defaults(builder, |builder, name, value| builder.header(name, value))
    }
}

impl BearerSink for ApiClient {
    fn set_credential(&self, token: Option<&str>) {
        let mut headers = self.headers.write().unwrap_or_else(PoisonError::into_inner);
        match token {
            Some(token) => {
                headers.insert(AUTHORIZATION.to_owned(), bearer_value(token));
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }
    }
}
