//! Favorites Panel Component

use leptos::prelude::*;
use listing_core::format::favorites_summary;
use listing_core::{Action, Listing, Tab};

use super::ListingCard;
use crate::context::use_portal;

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let portal = use_portal();
    let count = move || portal.with(|s| s.favorites().len());
    let saved = move || {
        portal.with(|s| s.favorite_listings().into_iter().cloned().collect::<Vec<Listing>>())
    };

    view! {
        <section class="panel placeholder-panel">
            <div class="panel-icon">"♥"</div>
            <h3>"Your Favorite Properties"</h3>
            <p>{move || favorites_summary(count())}</p>
            <Show
                when={move || count() > 0}
                fallback=move || view! {
                    <button
                        class="primary-btn"
                        on:click=move |_| portal.dispatch(Action::SelectTab(Tab::Search))
                    >
                        "Start Searching"
                    </button>
                }
            >
                <div class="listing-grid favorites-grid">
                    <For
                        each=saved
                        key=|listing| listing.id.clone()
                        children=move |listing| view! { <ListingCard listing=listing /> }
                    />
                </div>
            </Show>
        </section>
    }
}
