//! Listing Card Component
//!
//! One listing in the results grid, with its favorite toggle.

use leptos::prelude::*;
use listing_core::format::{format_bathrooms, format_price, group_thousands, humanize_tag};
use listing_core::{Action, Listing};

use crate::context::use_portal;

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let portal = use_portal();
    let id = listing.id.clone();
    let is_favorite = {
        let id = id.clone();
        move || portal.with(|s| s.is_favorite(&id))
    };

    let is_favorite_class = is_favorite.clone();

    let photo = match listing.primary_photo_url.clone() {
        Some(url) => view! { <img class="listing-photo" src=url alt=listing.address_line1.clone() /> }.into_any(),
        None => view! { <div class="listing-photo placeholder">"🏠"</div> }.into_any(),
    };

    let features = listing.has_features().then(|| {
        let beds = listing.bedrooms.unwrap_or_default();
        let baths = listing.bathrooms.map(format_bathrooms).unwrap_or_else(|| "-".to_string());
        view! {
            <div class="listing-features">
                <span>{format!("🛏 {} bed", beds)}</span>
                <span>{format!("🛁 {} bath", baths)}</span>
                {listing.square_feet.map(|sqft| view! {
                    <span>{format!("⬜ {} sqft", group_thousands(u64::from(sqft)))}</span>
                })}
            </div>
        }
    });

    view! {
        <article class="listing-card">
            <div class="listing-media">
                {photo}
                <button
                    class="favorite-btn"
                    class:active=is_favorite_class
                    on:click=move |_| portal.dispatch(Action::ToggleFavorite(id.clone()))
                >
                    {move || if is_favorite() { "♥" } else { "♡" }}
                </button>
            </div>

            <div class="listing-body">
                <div class="listing-heading">
                    <h3>{format_price(listing.list_price)}</h3>
                    <span class="category-badge">{humanize_tag(&listing.category)}</span>
                </div>
                <p class="listing-address">{listing.address_line1.clone()}</p>
                <p class="listing-locality">
                    {format!("{}, {} {}", listing.city, listing.state, listing.zip_code)}
                </p>
                {features}
                <div class="listing-actions">
                    <button class="primary-btn">"View Details"</button>
                    <button class="icon-btn" title="Schedule a showing">"📅"</button>
                </div>
            </div>
        </article>
    }
}
