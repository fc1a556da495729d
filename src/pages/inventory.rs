//! Inventory page, the authenticated landing route.
//!
//! Inventory listings are rendered by the views layered on this shell; this
//! page owns the session chrome (API location and sign-out).

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::BearerSink;
use crate::routes::RouteName;
use crate::state::session::{BrowserSession, CredentialStore};
use crate::util::storage::KeyValueStore;

/// Drop the stored credential and return the route to show next.
pub fn sign_out<S, H>(session: &CredentialStore<S, H>) -> RouteName
where
    S: KeyValueStore,
    H: BearerSink,
{
    session.clear();
    RouteName::Login
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();
    let api_base = session.http().base_url().to_owned();

    let on_sign_out = move |_| {
        let next = sign_out(&session);
        navigate(next.path(), NavigateOptions::default());
    };

    view! {
        <div class="inventory-page">
            <header class="inventory-page__header">
                <h1>"Inventory"</h1>
                <button class="inventory-page__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <p class="inventory-page__api">"API: " {api_base}</p>
        </div>
    }
}
