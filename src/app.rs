//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::{LastRoute, RouteGate};
use crate::config::ClientConfig;
use crate::pages::{inventory::InventoryPage, login::LoginPage};
use crate::routes::RouteName;
use crate::state::session::BrowserSession;

fn load_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    })
}

/// Root application component.
///
/// Provides the browser session and sets up client-side routing. Every
/// declared route is wrapped in a [`RouteGate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::debug!("api base url: {}", config.api_base_url);

    provide_context(BrowserSession::browser(&config));
    provide_context(LastRoute::new());

    view! {
        <Title text="Inventory"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGate route=RouteName::Login><LoginPage/></RouteGate> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGate route=RouteName::Home><InventoryPage/></RouteGate> }
                />
            </Routes>
        </Router>
    }
}
