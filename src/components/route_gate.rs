//! Render-time route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each route view. The guard runs synchronously when the route mounts,
//! before any child view is built, and either renders the children or
//! replaces the history entry with the redirect target.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::api::BearerSink;
use crate::routes::RouteName;
use crate::state::session::{BrowserSession, CredentialStore};
use crate::util::auth::{NavigationRequest, Transition, before_each};
use crate::util::storage::KeyValueStore;

/// Last route the gate let through; origin of the next navigation.
#[derive(Clone, Copy)]
pub struct LastRoute(pub StoredValue<Option<RouteName>>);

impl LastRoute {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }
}

impl Default for LastRoute {
    fn default() -> Self {
        Self::new()
    }
}

/// How a single gate check was resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GateDecision {
    #[default]
    Pending,
    Proceed,
    Redirect(RouteName),
}

impl Transition for &mut GateDecision {
    fn proceed(self) {
        debug_assert_eq!(*self, GateDecision::Pending);
        *self = GateDecision::Proceed;
    }

    fn redirect(self, to: RouteName) {
        debug_assert_eq!(*self, GateDecision::Pending);
        *self = GateDecision::Redirect(to);
    }
}

/// Result of gating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateStep {
    /// Route to send the user to instead, if any.
    pub redirect: Option<RouteName>,
    /// Origin to record for the next navigation.
    pub origin: Option<RouteName>,
}

/// Check navigation from `last` to `route`. The origin only advances when the
/// navigation is allowed.
pub fn gate<S, H>(
    session: &CredentialStore<S, H>,
    last: Option<RouteName>,
    route: RouteName,
) -> GateStep
where
    S: KeyValueStore,
    H: BearerSink,
{
    let mut decision = GateDecision::default();
    before_each(session, &NavigationRequest::new(Some(route), last), &mut decision);
    match decision {
        GateDecision::Redirect(target) => GateStep {
            redirect: Some(target),
            origin: last,
        },
        // before_each always resolves the transition; Pending cannot remain.
        GateDecision::Proceed | GateDecision::Pending => GateStep {
            redirect: None,
            origin: Some(route),
        },
    }
}

#[component]
pub fn RouteGate(route: RouteName, children: Children) -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let last_route = expect_context::<LastRoute>();

    let step = gate(&session, last_route.0.get_value(), route);
    last_route.0.set_value(step.origin);

    match step.redirect {
        None => Either::Left(children()),
        Some(target) => {
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            Either::Right(view! { <Redirect path=target.path() options=options/> })
        }
    }
}
