use super::*;

use crate::config::{CREDENTIAL_KEY, ClientConfig};
use crate::net::api::{AUTHORIZATION, ApiClient};
use crate::util::storage::MemoryStore;

#[derive(Debug, Default, PartialEq, Eq)]
enum Recorded {
    #[default]
    Pending,
    Proceeded,
    Redirected(RouteName),
}

impl Transition for &mut Recorded {
    fn proceed(self) {
        assert_eq!(*self, Recorded::Pending, "transition resolved twice");
        *self = Recorded::Proceeded;
    }

    fn redirect(self, to: RouteName) {
        assert_eq!(*self, Recorded::Pending, "transition resolved twice");
        *self = Recorded::Redirected(to);
    }
}

fn session_with(token: Option<&str>) -> CredentialStore<MemoryStore, ApiClient> {
    let storage = MemoryStore::new();
    if let Some(token) = token {
        storage.set(CREDENTIAL_KEY, token);
    }
    CredentialStore::new(storage, ApiClient::new(&ClientConfig::default()), CREDENTIAL_KEY)
}

fn navigate(session: &CredentialStore<MemoryStore, ApiClient>, to: RouteName) -> Recorded {
    let mut recorded = Recorded::default();
    before_each(session, &NavigationRequest::new(Some(to), None), &mut recorded);
    recorded
}

// =============================================================
// decide
// =============================================================

#[test]
fn no_credential_redirects_non_login_routes_to_login() {
    for route in RouteName::ALL.into_iter().filter(|r| !r.is_login()) {
        assert_eq!(decide(false, Some(route)), Outcome::Redirect(RouteName::Login));
    }
}

#[test]
fn credential_on_login_redirects_home() {
    assert_eq!(decide(true, Some(RouteName::Login)), Outcome::Redirect(RouteName::Home));
}

#[test]
fn no_credential_on_login_is_allowed() {
    assert_eq!(decide(false, Some(RouteName::Login)), Outcome::Allow);
}

#[test]
fn credential_on_home_is_allowed() {
    assert_eq!(decide(true, Some(RouteName::Home)), Outcome::Allow);
}

#[test]
fn unknown_destination_is_allowed_either_way() {
    assert_eq!(decide(false, None), Outcome::Allow);
    assert_eq!(decide(true, None), Outcome::Allow);
}

#[test]
fn decide_never_redirects_to_the_requested_route() {
    for has_credential in [false, true] {
        for route in RouteName::ALL {
            assert_ne!(decide(has_credential, Some(route)), Outcome::Redirect(route));
        }
    }
}

// =============================================================
// NavigationRequest
// =============================================================

#[test]
fn request_from_paths_maps_declared_routes() {
    let request = NavigationRequest::from_paths("/", Some("/login"));
    assert_eq!(request.to, Some(RouteName::Home));
    assert_eq!(request.from, Some(RouteName::Login));
}

#[test]
fn request_from_paths_leaves_unknown_destination_empty() {
    let request = NavigationRequest::from_paths("/nowhere", None);
    assert_eq!(request.to, None);
    assert_eq!(request.from, None);
}

// =============================================================
// before_each scenarios
// =============================================================

#[test]
fn scenario_signed_out_home_redirects_to_login() {
    let session = session_with(None);
    assert_eq!(navigate(&session, RouteName::Home), Recorded::Redirected(RouteName::Login));
}

#[test]
fn scenario_signed_out_login_stays() {
    let session = session_with(None);
    assert_eq!(navigate(&session, RouteName::Login), Recorded::Proceeded);
}

#[test]
fn scenario_signed_in_login_redirects_home_and_sets_header() {
    let session = session_with(Some("abc"));
    assert_eq!(navigate(&session, RouteName::Login), Recorded::Redirected(RouteName::Home));
    assert_eq!(session.http().default_header(AUTHORIZATION), Some("Bearer abc".to_owned()));
}

#[test]
fn scenario_signed_in_home_proceeds() {
    let session = session_with(Some("abc"));
    assert_eq!(navigate(&session, RouteName::Home), Recorded::Proceeded);
}

#[test]
fn unknown_destination_proceeds_when_signed_out() {
    let session = session_with(None);
    let mut recorded = Recorded::default();
    let request = NavigationRequest::from_paths("/nowhere", None);
    before_each(&session, &request, &mut recorded);
    assert_eq!(resolve(&session, &request), Outcome::Allow);
    assert_eq!(recorded, Recorded::Proceeded);
}

#[test]
fn repeated_checks_yield_same_outcome() {
    let session = session_with(Some("abc"));
    let request = NavigationRequest::new(Some(RouteName::Login), Some(RouteName::Home));
    let first = resolve(&session, &request);
    let second = resolve(&session, &request);
    assert_eq!(first, second);
}

#[test]
fn logout_then_home_redirects_to_login() {
    let session = session_with(Some("abc"));
    assert_eq!(navigate(&session, RouteName::Home), Recorded::Proceeded);
    session.clear();
    assert_eq!(navigate(&session, RouteName::Home), Recorded::Redirected(RouteName::Login));
    assert_eq!(session.http().default_header(AUTHORIZATION), None);
}

#[test]
fn login_then_login_route_redirects_home() {
    let session = session_with(None);
    assert_eq!(navigate(&session, RouteName::Login), Recorded::Proceeded);
    session.write("fresh");
    assert_eq!(navigate(&session, RouteName::Login), Recorded::Redirected(RouteName::Home));
}
