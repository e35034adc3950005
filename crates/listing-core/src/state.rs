//! Portal State
//!
//! All page state in one container, changed only through `apply`.
//! Criteria changes hand back a `FetchTicket`; the caller runs it against a
//! `ListingSource` and feeds the outcome back as `Action::FetchSettled`.

use crate::domain::{
    CityFilter, Listing, ListingId, MinBedrooms, PriceCeiling, PropertyTypeFilter, SearchCriteria,
};
use crate::error::{FetchError, FetchResult};
use crate::favorites::FavoriteSet;
use crate::filter::filter_by_text;
use crate::format;
use crate::query::ListingQuery;
use crate::sequence::{RequestSeq, RequestSequencer};
use crate::source::ListingSource;
use crate::tabs::Tab;

/// Every event the page can raise
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCity(CityFilter),
    SelectMaxPrice(PriceCeiling),
    SelectMinBeds(MinBedrooms),
    SelectPropertyType(PropertyTypeFilter),
    /// Free text; filtered locally, never refetches
    SetSearchText(String),
    ToggleFavorite(ListingId),
    SelectTab(Tab),
    /// Fetch again with the current criteria (initial load, retry)
    Refresh,
    FetchSettled {
        seq: RequestSeq,
        outcome: FetchResult<Vec<Listing>>,
    },
}

/// A fetch the caller must run and report back
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: RequestSeq,
    pub query: ListingQuery,
}

impl FetchTicket {
    /// Run the query and wrap the outcome as the action to apply next
    pub async fn run<S: ListingSource + ?Sized>(self, source: &S) -> Action {
        let outcome = source.fetch(&self.query).await;
        Action::FetchSettled {
            seq: self.seq,
            outcome,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortalState {
    criteria: SearchCriteria,
    search_text: String,
    favorites: FavoriteSet,
    active_tab: Tab,
    /// Last accepted fetch response
    results: Vec<Listing>,
    loading: bool,
    last_error: Option<FetchError>,
    sequencer: RequestSequencer,
}

impl PortalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns the fetch to run, if the event requires one.
    pub fn apply(&mut self, action: Action) -> Option<FetchTicket> {
        match action {
            Action::SelectCity(city) => self.update_criteria(|c| c.city = city),
            Action::SelectMaxPrice(max_price) => self.update_criteria(|c| c.max_price = max_price),
            Action::SelectMinBeds(min_beds) => self.update_criteria(|c| c.min_beds = min_beds),
            Action::SelectPropertyType(kind) => self.update_criteria(|c| c.property_type = kind),
            Action::SetSearchText(text) => {
                self.search_text = text;
                None
            }
            Action::ToggleFavorite(id) => {
                self.favorites.toggle(&id);
                None
            }
            Action::SelectTab(tab) => {
                self.active_tab = tab;
                None
            }
            Action::Refresh => Some(self.issue_fetch()),
            Action::FetchSettled { seq, outcome } => {
                self.settle(seq, outcome);
                None
            }
        }
    }

    fn update_criteria(&mut self, change: impl FnOnce(&mut SearchCriteria)) -> Option<FetchTicket> {
        let mut next = self.criteria;
        change(&mut next);
        if next == self.criteria {
            return None;
        }
        self.criteria = next;
        Some(self.issue_fetch())
    }

    fn issue_fetch(&mut self) -> FetchTicket {
        let seq = self.sequencer.issue();
        let query = ListingQuery::for_criteria(&self.criteria);
        log::debug!("[STATE] Issuing fetch #{}: {:?}", seq.value(), self.criteria);
        self.loading = true;
        FetchTicket { seq, query }
    }

    fn settle(&mut self, seq: RequestSeq, outcome: FetchResult<Vec<Listing>>) {
        if !self.sequencer.is_current(seq) {
            log::debug!("[STATE] Discarding stale response #{}", seq.value());
            return;
        }
        self.loading = false;
        match outcome {
            Ok(listings) => {
                log::info!("[STATE] Loaded {} listings (fetch #{})", listings.len(), seq.value());
                self.results = listings;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("[STATE] Error loading listings (fetch #{}): {}", seq.value(), e);
                self.last_error = Some(e);
            }
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited listings present in the current results, in id order
    pub fn favorite_listings(&self) -> Vec<&Listing> {
        self.favorites
            .iter()
            .filter_map(|id| self.results.iter().find(|listing| listing.id == id))
            .collect()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Last accepted fetch response, unfiltered
    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    /// Results passing the free-text query, in fetch order
    pub fn visible_listings(&self) -> Vec<&Listing> {
        filter_by_text(&self.results, &self.search_text)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the latest fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Nothing to show once loading is over
    pub fn is_empty(&self) -> bool {
        !self.loading && self.visible_listings().is_empty()
    }

    pub fn results_summary(&self) -> String {
        format::results_summary(self.visible_listings().len(), &self.criteria.city)
    }
}
