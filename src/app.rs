//! Customer Portal App
//!
//! Header, tab bar and exactly one panel for the active tab.

use leptos::prelude::*;
use listing_core::{Action, Tab};
use reactive_stores::Store;

use crate::components::{FavoritesPanel, PlaceholderPanel, PortalHeader, SearchPanel, TabBar};
use crate::config::load_source_config;
use crate::context::{use_portal, PortalContext};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let source_config = match load_source_config() {
        Ok(config) => {
            log::info!("[APP] Listing source: {}", config.url);
            Some(config)
        }
        Err(e) => {
            log::error!("[APP] No listing source configured: {}", e);
            None
        }
    };

    let store = Store::new(AppState::new(source_config));
    let portal = PortalContext::new(store);
    provide_context(portal);

    // Initial load with default criteria
    portal.dispatch(Action::Refresh);

    view! {
        <div class="portal">
            <PortalHeader />
            <ActivePanel />
        </div>
    }
}

/// Tab bar plus the panel for the active tab
#[component]
fn ActivePanel() -> impl IntoView {
    let portal = use_portal();
    // Memo so typing in the search box does not rebuild the panel
    let active_tab = Memo::new(move |_| portal.with(|s| s.active_tab()));

    view! {
        <TabBar active_tab=active_tab />
        <main class="portal-content">
            {move || match active_tab.get() {
                Tab::Search => view! { <SearchPanel /> }.into_any(),
                Tab::Favorites => view! { <FavoritesPanel /> }.into_any(),
                Tab::MyTransactions => view! {
                    <PlaceholderPanel
                        icon="📄"
                        title="Your Transactions"
                        description="Track your property transactions and closing progress"
                    />
                }.into_any(),
                Tab::Documents => view! {
                    <PlaceholderPanel
                        icon="📄"
                        title="Your Documents"
                        description="Access contracts, inspections, and closing documents"
                    />
                }.into_any(),
                Tab::Messages => view! {
                    <PlaceholderPanel
                        icon="💬"
                        title="Messages"
                        description="Communicate with your agent and other parties"
                    />
                }.into_any(),
            }}
        </main>
    }
}
