//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the portal state itself lives in
//! `listing_core::PortalState` and changes only through actions.

use listing_core::{PortalState, SourceConfig};
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Criteria, results, favorites and active tab
    pub portal: PortalState,
    /// Listing source; `None` when the page was served without config
    pub source_config: Option<SourceConfig>,
}

impl AppState {
    pub fn new(source_config: Option<SourceConfig>) -> Self {
        Self {
            portal: PortalState::new(),
            source_config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
