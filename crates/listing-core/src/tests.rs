//! Search Flow Tests
//!
//! Drive `PortalState` against `MemoryListingSource` the way the page does.

use chrono::{TimeZone, Utc};

use crate::domain::{
    City, CityFilter, Listing, MinBedrooms, PriceCeiling, PropertyType, PropertyTypeFilter,
    SearchCriteria,
};
use crate::error::FetchError;
use crate::query::{Column, Filter, FilterValue, Order, MAX_RESULTS};
use crate::source::{ListingSource, MemoryListingSource};
use crate::state::{Action, PortalState};

fn listing(id: &str, address: &str, city: &str, price: u64, beds: Option<u32>) -> Listing {
    let mut listing = Listing::new(id, address, city, price);
    listing.bedrooms = beds;
    listing
}

fn catalog() -> Vec<Listing> {
    let mut rows = vec![
        listing("m1", "123 Palm Ave", "Miami", 450_000, Some(3)),
        listing("m2", "8 Coral Way", "Miami", 320_000, Some(2)),
        listing("m3", "77 Brickell Key", "Miami", 495_000, Some(4)),
        listing("m4", "1 Star Island", "Miami", 4_900_000, Some(6)),
        listing("m5", "40 Flagler St", "Miami", 210_000, Some(1)),
        listing("m6", "12 Biscayne Blvd", "Miami", 300_000, None),
        listing("t1", "55 Ocean Dr", "Tampa", 380_000, Some(2)),
        listing("o1", "9 Lake Eola Dr", "Orlando", 275_000, Some(3)),
    ];
    let mut sold = listing("m7", "2 Sold Ct", "Miami", 400_000, Some(3));
    sold.status = Some("sold".to_string());
    rows.push(sold);
    let mut condo = listing("n1", "3 Gulf Shore Blvd", "Naples", 640_000, Some(2));
    condo.property_type = "condo".to_string();
    rows.push(condo);

    for (day, row) in rows.iter_mut().enumerate() {
        row.created_at = Some(Utc.with_ymd_and_hms(2024, 5, day as u32 + 1, 9, 0, 0).unwrap());
    }
    rows
}

async fn dispatch(state: &mut PortalState, source: &dyn ListingSource, action: Action) {
    if let Some(ticket) = state.apply(action) {
        let settled = ticket.run(source).await;
        assert!(state.apply(settled).is_none());
    }
}

#[tokio::test]
async fn test_every_returned_listing_satisfies_the_criteria() {
    let source = MemoryListingSource::new(catalog());
    let cities = [CityFilter::All, CityFilter::Only(City::Miami), CityFilter::Only(City::Tampa)];

    for city in cities {
        for max_price in PriceCeiling::ALL {
            for min_beds in MinBedrooms::options() {
                let criteria = SearchCriteria {
                    city,
                    max_price,
                    min_beds,
                    property_type: PropertyTypeFilter::All,
                };
                let query = crate::query::ListingQuery::for_criteria(&criteria);
                let found = source.fetch(&query).await.unwrap();

                assert!(found.len() <= MAX_RESULTS as usize);
                for row in &found {
                    assert_eq!(row.status.as_deref(), Some("active"));
                    assert!(row.list_price <= max_price.amount());
                    if let Some(city) = city.city() {
                        assert_eq!(row.city, city.name());
                    }
                    if !min_beds.is_any() {
                        assert!(row.bedrooms.unwrap_or(0) >= min_beds.count());
                    }
                }
            }
        }
    }
}

#[tokio::test]
async fn test_miami_under_500k_with_two_beds() {
    let source = MemoryListingSource::new(catalog());
    let mut state = PortalState::new();

    dispatch(&mut state, &source, Action::SelectCity(CityFilter::Only(City::Miami))).await;
    dispatch(&mut state, &source, Action::SelectMaxPrice(PriceCeiling::Upto500K)).await;
    dispatch(&mut state, &source, Action::SelectMinBeds(MinBedrooms::new(2).unwrap())).await;

    let last = source.received().pop().unwrap();
    assert_eq!(
        last.filters(),
        &[
            Filter::Eq(Column::Status, FilterValue::Text("active".to_string())),
            Filter::Gte(Column::ListPrice, FilterValue::Int(0)),
            Filter::Lte(Column::ListPrice, FilterValue::Int(500_000)),
            Filter::Eq(Column::City, FilterValue::Text("Miami".to_string())),
            Filter::Gte(Column::Bedrooms, FilterValue::Int(2)),
        ]
    );
    assert_eq!(last.limit(), 50);
    assert_eq!(last.order(), Order::newest_first());

    // m1, m2, m3 qualify; newest first
    let shown: Vec<&str> = state.visible_listings().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(shown, vec!["m3", "m2", "m1"]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_free_text_filters_without_refetch() {
    let source = MemoryListingSource::new(vec![
        listing("1", "123 Palm Ave", "Miami", 450_000, Some(3)),
        listing("2", "55 Ocean Dr", "Tampa", 380_000, Some(2)),
    ]);
    let mut state = PortalState::new();

    dispatch(&mut state, &source, Action::Refresh).await;
    dispatch(&mut state, &source, Action::SetSearchText("ocean".to_string())).await;

    assert_eq!(source.received().len(), 1);
    let shown: Vec<(&str, &str)> = state
        .visible_listings()
        .iter()
        .map(|l| (l.address_line1.as_str(), l.city.as_str()))
        .collect();
    assert_eq!(shown, vec![("55 Ocean Dr", "Tampa")]);
    assert_eq!(state.results().len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_with_no_prior_results() {
    let source = MemoryListingSource::failing(FetchError::Status {
        status: 503,
        body: "unavailable".to_string(),
    });
    let mut state = PortalState::new();

    let ticket = state.apply(Action::Refresh).unwrap();
    assert!(state.is_loading());
    let settled = ticket.run(&source).await;
    state.apply(settled);

    assert!(!state.is_loading());
    assert!(state.visible_listings().is_empty());
    assert!(state.is_empty());
    assert!(matches!(state.last_error(), Some(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_failure_keeps_last_good_results() {
    let good = MemoryListingSource::new(catalog());
    let broken = MemoryListingSource::failing(FetchError::Transport("offline".to_string()));
    let mut state = PortalState::new();

    dispatch(&mut state, &good, Action::Refresh).await;
    let before: Vec<Listing> = state.results().to_vec();
    assert!(!before.is_empty());

    dispatch(&mut state, &broken, Action::SelectCity(CityFilter::Only(City::Orlando))).await;

    assert!(!state.is_loading());
    assert_eq!(state.results(), before.as_slice());
    assert!(state.last_error().is_some());
}

#[tokio::test]
async fn test_out_of_order_completion_keeps_newest() {
    let source = MemoryListingSource::new(catalog());
    let mut state = PortalState::new();

    let miami = state.apply(Action::SelectCity(CityFilter::Only(City::Miami))).unwrap();
    let tampa = state.apply(Action::SelectCity(CityFilter::Only(City::Tampa))).unwrap();

    let tampa_done = tampa.run(&source).await;
    let miami_done = miami.run(&source).await;
    state.apply(tampa_done);
    state.apply(miami_done);

    assert!(state.results().iter().all(|l| l.city == "Tampa"));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_property_type_narrows_results() {
    let source = MemoryListingSource::new(catalog());
    let mut state = PortalState::new();

    dispatch(
        &mut state,
        &source,
        Action::SelectPropertyType(PropertyTypeFilter::Only(PropertyType::Condo)),
    )
    .await;

    let shown: Vec<&str> = state.visible_listings().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(shown, vec!["n1"]);
}
