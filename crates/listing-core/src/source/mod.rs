//! Listing Sources
//!
//! Abstract access to the `properties` listings.
//! Implementations: the hosted REST table, and in-memory rows.

use async_trait::async_trait;

use crate::domain::Listing;
use crate::error::FetchResult;
use crate::query::ListingQuery;

mod memory;
mod rest;

pub use memory::MemoryListingSource;
pub use rest::{decode_listings, RestListingSource};

/// Anything that can answer a listing query.
///
/// Futures are not required to be `Send`: in the browser every fetch runs
/// on the single page thread.
#[async_trait(?Send)]
pub trait ListingSource {
    /// Run the query, returning matching listings in the query's order
    async fn fetch(&self, query: &ListingQuery) -> FetchResult<Vec<Listing>>;
}
