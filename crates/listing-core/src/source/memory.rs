//! In-Memory Source
//!
//! Answers queries from rows held in memory using the query's own
//! predicate evaluation. Records every query it receives.

use std::cell::RefCell;

use async_trait::async_trait;

use super::ListingSource;
use crate::domain::Listing;
use crate::error::{FetchError, FetchResult};
use crate::query::ListingQuery;

#[derive(Debug, Default)]
pub struct MemoryListingSource {
    rows: Vec<Listing>,
    failure: Option<FetchError>,
    received: RefCell<Vec<ListingQuery>>,
}

impl MemoryListingSource {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// A source whose every fetch fails with `error`
    pub fn failing(error: FetchError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Queries received so far, oldest first
    pub fn received(&self) -> Vec<ListingQuery> {
        self.received.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ListingSource for MemoryListingSource {
    async fn fetch(&self, query: &ListingQuery) -> FetchResult<Vec<Listing>> {
        self.received.borrow_mut().push(query.clone());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(query.run(&self.rows)),
        }
    }
}
