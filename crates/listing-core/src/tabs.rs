//! Portal Tabs
//!
//! Exactly one panel is shown at a time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Search,
    Favorites,
    MyTransactions,
    Documents,
    Messages,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 5] = [
        Tab::Search,
        Tab::Favorites,
        Tab::MyTransactions,
        Tab::Documents,
        Tab::Messages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Search => "search",
            Tab::Favorites => "favorites",
            Tab::MyTransactions => "my-transactions",
            Tab::Documents => "documents",
            Tab::Messages => "messages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Favorites => "Favorites",
            Tab::MyTransactions => "My transactions",
            Tab::Documents => "Documents",
            Tab::Messages => "Messages",
        }
    }
}
