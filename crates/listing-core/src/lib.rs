//! Listing Core
//!
//! UI-free domain of the customer portal:
//! - domain: listings and the enumerated filter criteria
//! - query: predicate query built from criteria, rendered for PostgREST
//! - filter: client-side free-text refinement
//! - state: reducer-style portal state driving fetches
//! - source: where listings come from (hosted REST table, in-memory)

pub mod config;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod format;
pub mod query;
pub mod sequence;
pub mod source;
pub mod state;
pub mod tabs;

#[cfg(test)]
mod tests;

pub use config::SourceConfig;
pub use domain::{
    City, CityFilter, Listing, ListingId, MinBedrooms, PriceCeiling, PropertyType,
    PropertyTypeFilter, SearchCriteria,
};
pub use error::{ConfigError, CriteriaError, FetchError};
pub use favorites::FavoriteSet;
pub use filter::filter_by_text;
pub use query::{Column, Filter, FilterValue, ListingQuery, Order, MAX_RESULTS, PRICE_FLOOR};
pub use sequence::{RequestSeq, RequestSequencer};
pub use source::{ListingSource, MemoryListingSource, RestListingSource};
pub use state::{Action, FetchTicket, PortalState};
pub use tabs::Tab;
