//! Placeholder Panel Component
//!
//! Static panel for sections that have no data behind them yet.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPanel(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <section class="panel placeholder-panel">
            <div class="panel-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </section>
    }
}
