//! Session-gated navigation policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route transition passes through [`before_each`] before the
//! destination view renders. The decision depends only on whether a
//! credential is stored and which route is requested; the token itself is
//! never validated here.
//!
//! | credential | destination | outcome            |
//! |------------|-------------|--------------------|
//! | absent     | not login   | redirect to login  |
//! | present    | login       | redirect to home   |
//! | otherwise  |             | allow              |
//!
//! Destinations outside the route table are always allowed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::BearerSink;
use crate::routes::RouteName;
use crate::state::session::CredentialStore;
use crate::util::storage::KeyValueStore;

/// Result of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Continue to the requested destination unchanged.
    Allow,
    /// Replace the destination with another route.
    Redirect(RouteName),
}

/// A single transition attempt: `to` is `None` for undeclared destinations,
/// `from` is `None` on the first navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub to: Option<RouteName>,
    pub from: Option<RouteName>,
}

impl NavigationRequest {
    pub fn new(to: Option<RouteName>, from: Option<RouteName>) -> Self {
        Self { to, from }
    }

    /// Build a request from location pathnames.
    pub fn from_paths(to: &str, from: Option<&str>) -> Self {
        Self {
            to: RouteName::from_path(to).ok(),
            from: from.and_then(|path| RouteName::from_path(path).ok()),
        }
    }
}

/// Router-side handle for a pending transition. Consuming `self` means
/// exactly one of the two calls happens.
pub trait Transition {
    fn proceed(self);
    fn redirect(self, to: RouteName);
}

impl Outcome {
    pub fn apply<T: Transition>(self, transition: T) {
        match self {
            Self::Allow => transition.proceed(),
            Self::Redirect(route) => transition.redirect(route),
        }
    }
}

/// Pure navigation decision.
pub fn decide(has_credential: bool, to: Option<RouteName>) -> Outcome {
    let Some(to) = to else {
        return Outcome::Allow;
    };
    // The missing-credential rule runs first so login stays reachable when signed out.
    if !has_credential && !to.is_login() {
        return Outcome::Redirect(RouteName::Login);
    }
    if has_credential && to.is_login() {
        return Outcome::Redirect(RouteName::Home);
    }
    Outcome::Allow
}

/// Read the session and decide the outcome for `request`.
pub fn resolve<S, H>(session: &CredentialStore<S, H>, request: &NavigationRequest) -> Outcome
where
    S: KeyValueStore,
    H: BearerSink,
{
    let has_credential = session.has_credential();
    let outcome = decide(has_credential, request.to);
    log::debug!(
        "navigation guard: from={:?} to={:?} credential={has_credential} outcome={outcome:?}",
        request.from,
        request.to,
    );
    if let Outcome::Redirect(route) = outcome {
        log::info!("redirecting to {route}");
    }
    outcome
}

/// Pre-transition hook: resolve `request` and drive `transition` with the result.
pub fn before_each<S, H, T>(
    session: &CredentialStore<S, H>,
    request: &NavigationRequest,
    transition: T,
) where
    S: KeyValueStore,
    H: BearerSink,
    T: Transition,
{
    resolve(session, request).apply(transition);
}
