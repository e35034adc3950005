//! Tab Bar Component
//!
//! Switches between the five portal panels.

use leptos::prelude::*;
use listing_core::{Action, Tab};

use crate::context::use_portal;

#[component]
pub fn TabBar(active_tab: Memo<Tab>) -> impl IntoView {
    let portal = use_portal();

    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if active_tab.get() == tab { "tab active" } else { "tab" }
                };
                view! {
                    <button
                        class=tab_class
                        data-tab=tab.as_str()
                        on:click=move |_| portal.dispatch(Action::SelectTab(tab))
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
