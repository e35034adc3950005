//! Client-Side Text Filter
//!
//! Refines fetched listings by a free-text query without another fetch.

use crate::domain::Listing;

/// Case-insensitive substring match against street address or city.
/// An empty query matches everything.
pub fn matches_text(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowercase(listing, &query.to_lowercase())
}

fn matches_lowercase(listing: &Listing, needle: &str) -> bool {
    listing.address_line1.to_lowercase().contains(needle)
        || listing.city.to_lowercase().contains(needle)
}

/// Listings passing the text query, in fetch order
pub fn filter_by_text<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    if query.is_empty() {
        return listings.iter().collect();
    }
    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| matches_lowercase(listing, &needle))
        .collect()
}
