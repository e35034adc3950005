//! Domain Layer
//!
//! Listing records and the closed sets of search criteria.
//! No UI or transport dependencies (serde and chrono only).

mod criteria;
mod listing;

pub use criteria::{
    City, CityFilter, MinBedrooms, PriceCeiling, PropertyType, PropertyTypeFilter,
    SearchCriteria,
};
pub use listing::{Listing, ListingId};
