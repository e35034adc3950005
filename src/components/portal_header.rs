//! Portal Header Component

use leptos::prelude::*;
use listing_core::{Action, Tab};

use crate::context::use_portal;

#[component]
pub fn PortalHeader() -> impl IntoView {
    let portal = use_portal();
    let favorite_count = move || portal.with(|s| s.favorites().len());

    view! {
        <header class="portal-header">
            <div>
                <h1>"AgentOS Customer Portal"</h1>
                <p class="tagline">"Find your dream property in Florida"</p>
            </div>
            <button
                class="favorites-btn"
                on:click=move |_| portal.dispatch(Action::SelectTab(Tab::Favorites))
            >
                "♥ Favorites (" {favorite_count} ")"
            </button>
        </header>
    }
}
