//! Search Panel Component
//!
//! Filters, fetch status and the listing grid.

use leptos::prelude::*;
use listing_core::{Action, Listing};

use super::{FilterBar, ListingCard};
use crate::context::use_portal;

/// Shown when the latest fetch failed; stale results stay on screen
#[component]
fn FetchErrorNotice() -> impl IntoView {
    let portal = use_portal();
    let has_error = move || portal.with(|s| s.last_error().is_some());

    view! {
        <Show when=has_error>
            <div class="fetch-error" role="alert">
                <span>"Couldn't refresh listings."</span>
                <button on:click=move |_| portal.dispatch(Action::Refresh)>"Retry"</button>
            </div>
        </Show>
    }
}

#[component]
fn ListingGrid() -> impl IntoView {
    let portal = use_portal();
    let visible = move || {
        portal.with(|s| s.visible_listings().into_iter().cloned().collect::<Vec<Listing>>())
    };

    view! {
        <div class="listing-grid">
            <For
                each=visible
                key=|listing| listing.id.clone()
                children=move |listing| view! { <ListingCard listing=listing /> }
            />
        </div>
    }
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let portal = use_portal();
    let loading = Memo::new(move |_| portal.with(|s| s.is_loading()));
    let empty = Memo::new(move |_| portal.with(|s| s.is_empty()));

    view! {
        <section class="search-panel">
            <FilterBar />
            <FetchErrorNotice />

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Loading properties..."</p>
                    </div>
                }
            >
                <ListingGrid />
            </Show>

            <Show when=move || empty.get()>
                <div class="empty-state">
                    <div class="panel-icon">"📍"</div>
                    <h3>"No properties found"</h3>
                    <p>"Try adjusting your search criteria"</p>
                </div>
            </Show>
        </section>
    }
}
