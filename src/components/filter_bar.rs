//! Filter Bar Component
//!
//! Free-text search plus the four criteria selects.
//! Select changes refetch; the text box only filters what is loaded.

use leptos::prelude::*;
use listing_core::{
    Action, City, CityFilter, CriteriaError, MinBedrooms, PriceCeiling, PropertyType,
    PropertyTypeFilter,
};

use crate::context::use_portal;

fn log_bad_option(err: CriteriaError) {
    log::warn!("[FILTER] Ignoring option: {}", err);
}

/// Search box for address or city
#[component]
fn SearchBox() -> impl IntoView {
    let portal = use_portal();

    view! {
        <div class="search-box">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Search by address or city..."
                prop:value=move || portal.with(|s| s.search_text().to_string())
                on:input=move |ev| portal.dispatch(Action::SetSearchText(event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let portal = use_portal();
    let city = move || portal.with(|s| s.criteria().city);
    let max_price = move || portal.with(|s| s.criteria().max_price);
    let min_beds = move || portal.with(|s| s.criteria().min_beds);
    let property_type = move || portal.with(|s| s.criteria().property_type);

    view! {
        <div class="filter-panel">
            <SearchBox />

            <div class="filter-row">
                <label class="filter">
                    <span>"City"</span>
                    <select on:change={move |ev| match event_target_value(&ev).parse::<CityFilter>() {
                        Ok(choice) => portal.dispatch(Action::SelectCity(choice)),
                        Err(e) => log_bad_option(e),
                    }}>
                        <option value=CityFilter::All.as_str() prop:selected=move || city() == CityFilter::All>
                            "All Cities"
                        </option>
                        {City::ALL.into_iter().map(|option| {
                            view! {
                                <option
                                    value=option.name()
                                    prop:selected=move || city() == CityFilter::Only(option)
                                >
                                    {option.name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="filter">
                    <span>"Max Price"</span>
                    <select on:change={move |ev| match event_target_value(&ev).parse::<PriceCeiling>() {
                        Ok(choice) => portal.dispatch(Action::SelectMaxPrice(choice)),
                        Err(e) => log_bad_option(e),
                    }}>
                        {PriceCeiling::ALL.into_iter().map(|option| {
                            view! {
                                <option
                                    value=option.amount().to_string()
                                    prop:selected=move || max_price() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="filter">
                    <span>"Min Bedrooms"</span>
                    <select on:change={move |ev| match event_target_value(&ev).parse::<MinBedrooms>() {
                        Ok(choice) => portal.dispatch(Action::SelectMinBeds(choice)),
                        Err(e) => log_bad_option(e),
                    }}>
                        {MinBedrooms::options().map(|option| {
                            view! {
                                <option
                                    value=option.count().to_string()
                                    prop:selected=move || min_beds() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="filter">
                    <span>"Property Type"</span>
                    <select on:change={move |ev| match event_target_value(&ev).parse::<PropertyTypeFilter>() {
                        Ok(choice) => portal.dispatch(Action::SelectPropertyType(choice)),
                        Err(e) => log_bad_option(e),
                    }}>
                        <option
                            value=PropertyTypeFilter::All.as_str()
                            prop:selected=move || property_type() == PropertyTypeFilter::All
                        >
                            "All Types"
                        </option>
                        {PropertyType::ALL.into_iter().map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    prop:selected=move || property_type() == PropertyTypeFilter::Only(option)
                                >
                                    {option.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <p class="results-summary">{move || portal.with(|s| s.results_summary())}</p>
        </div>
    }
}
