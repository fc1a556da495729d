use super::*;

use crate::config::{CREDENTIAL_KEY, ClientConfig};
use crate::net::api::{AUTHORIZATION, ApiClient};
use crate::util::storage::MemoryStore;

#[test]
fn sign_out_clears_session_and_targets_login() {
    let storage = MemoryStore::new();
    let api = ApiClient::new(&ClientConfig::default());
    let session = CredentialStore::new(storage.clone(), api, CREDENTIAL_KEY);
    session.write("abc");

    assert_eq!(sign_out(&session), RouteName::Login);
    assert!(storage.is_empty());
    assert_eq!(session.http().default_header(AUTHORIZATION), None);
}

#[test]
fn sign_out_without_session_is_harmless() {
    let api = ApiClient::new(&ClientConfig::default());
    let session = CredentialStore::new(MemoryStore::new(), api, CREDENTIAL_KEY);
    assert_eq!(sign_out(&session), RouteName::Login);
    assert_eq!(session.read(), None);
}
