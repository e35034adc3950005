//! Portal Context
//!
//! Dispatches actions into the store and runs the fetches they ask for.

use leptos::prelude::*;
use leptos::task::spawn_local;
use listing_core::{Action, FetchError, FetchTicket, PortalState, RestListingSource};

use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct PortalContext {
    store: AppStore,
}

impl PortalContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Apply an action; start a fetch if the action calls for one
    pub fn dispatch(&self, action: Action) {
        let ticket = self.store.portal().write().apply(action);
        if let Some(ticket) = ticket {
            self.run_fetch(ticket);
        }
    }

    /// Read the portal state (tracked)
    pub fn with<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        f(&self.store.portal().read())
    }

    fn run_fetch(&self, ticket: FetchTicket) {
        let store = self.store;
        let config = store.source_config().get_untracked();
        spawn_local(async move {
            let settled = match config {
                Some(config) => ticket.run(&RestListingSource::new(config)).await,
                None => Action::FetchSettled {
                    seq: ticket.seq,
                    outcome: Err(FetchError::Unconfigured),
                },
            };
            store.portal().write().apply(settled);
        });
    }
}

/// Get the portal context
pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}
