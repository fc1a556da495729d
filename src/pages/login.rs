//! Login page shown to signed-out users.
//!
//! Token acquisition belongs to the external login flow; once it stores a
//! credential, the route gate sends the user on to the inventory.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Inventory"</h1>
                <p class="login-card__subtitle">"Sign in to continue."</p>
            </div>
        </div>
    }
}
