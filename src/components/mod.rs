//! UI Components
//!
//! Leptos components for the customer portal page.

mod favorites_panel;
mod filter_bar;
mod listing_card;
mod placeholder_panel;
mod portal_header;
mod search_panel;
mod tab_bar;

pub use favorites_panel::FavoritesPanel;
pub use filter_bar::FilterBar;
pub use listing_card::ListingCard;
pub use placeholder_panel::PlaceholderPanel;
pub use portal_header::PortalHeader;
pub use search_panel::SearchPanel;
pub use tab_bar::TabBar;
