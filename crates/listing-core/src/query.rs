//! Listing Query Builder
//!
//! Turns the fetch-affecting criteria into a conjunctive predicate query
//! against the `properties` table. The query is plain data so it can be
//! rendered for the REST source or evaluated locally.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{Listing, SearchCriteria};

/// Table every listing query reads from
pub const TABLE: &str = "properties";
/// Hard cap on rows per query
pub const MAX_RESULTS: u32 = 50;
/// Lower price bound; not user-controlled
pub const PRICE_FLOOR: u64 = 0;
/// Only listings with this status are ever requested
pub const ACTIVE_STATUS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Status,
    ListPrice,
    City,
    Bedrooms,
    PropertyType,
    CreatedAt,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Status => "status",
            Column::ListPrice => "list_price",
            Column::City => "city",
            Column::Bedrooms => "bedrooms",
            Column::PropertyType => "property_type",
            Column::CreatedAt => "created_at",
        }
    }

    /// Value of this column on a listing; `None` is SQL null
    fn value_of(&self, listing: &Listing) -> Option<FilterValue> {
        match self {
            Column::Status => listing.status.clone().map(FilterValue::Text),
            Column::ListPrice => Some(FilterValue::Int(listing.list_price)),
            Column::City => Some(FilterValue::Text(listing.city.clone())),
            Column::Bedrooms => listing.bedrooms.map(|beds| FilterValue::Int(u64::from(beds))),
            Column::PropertyType => Some(FilterValue::Text(listing.property_type.clone())),
            Column::CreatedAt => listing.created_at.map(FilterValue::Time),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(u64),
    Time(DateTime<Utc>),
}

impl FilterValue {
    fn compare(&self, other: &FilterValue) -> Option<Ordering> {
        match (self, other) {
            (FilterValue::Int(a), FilterValue::Int(b)) => Some(a.cmp(b)),
            (FilterValue::Text(a), FilterValue::Text(b)) => Some(a.cmp(b)),
            (FilterValue::Time(a), FilterValue::Time(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Time(at) => f.write_str(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// A single predicate; a query holds the conjunction of its filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq(Column, FilterValue),
    Gte(Column, FilterValue),
    Lte(Column, FilterValue),
}

impl Filter {
    pub fn column(&self) -> Column {
        match self {
            Filter::Eq(column, _) | Filter::Gte(column, _) | Filter::Lte(column, _) => *column,
        }
    }

    pub fn value(&self) -> &FilterValue {
        match self {
            Filter::Eq(_, value) | Filter::Gte(_, value) | Filter::Lte(_, value) => value,
        }
    }

    /// PostgREST operator name
    pub fn operator(&self) -> &'static str {
        match self {
            Filter::Eq(..) => "eq",
            Filter::Gte(..) => "gte",
            Filter::Lte(..) => "lte",
        }
    }

    /// Null columns and mismatched value kinds never match
    pub fn matches(&self, listing: &Listing) -> bool {
        let Some(actual) = self.column().value_of(listing) else {
            return false;
        };
        match (self, actual.compare(self.value())) {
            (Filter::Eq(..), Some(ord)) => ord == Ordering::Equal,
            (Filter::Gte(..), Some(ord)) => ord != Ordering::Less,
            (Filter::Lte(..), Some(ord)) => ord != Ordering::Greater,
            (_, None) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: Column,
    pub descending: bool,
}

impl Order {
    pub fn newest_first() -> Self {
        Self { column: Column::CreatedAt, descending: true }
    }

    /// Nulls compare greater than any value, so they come last ascending
    /// and first descending (PostgreSQL defaults).
    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        let ord = match (self.column.value_of(a), self.column.value_of(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.compare(&y).unwrap_or(Ordering::Equal),
        };
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Bounded, ordered fetch request for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    filters: Vec<Filter>,
    order: Order,
    limit: u32,
}

impl ListingQuery {
    /// Build the query for the given criteria
    pub fn for_criteria(criteria: &SearchCriteria) -> Self {
        let mut filters = vec![
            Filter::Eq(Column::Status, FilterValue::Text(ACTIVE_STATUS.to_string())),
            Filter::Gte(Column::ListPrice, FilterValue::Int(PRICE_FLOOR)),
            Filter::Lte(Column::ListPrice, FilterValue::Int(criteria.max_price.amount())),
        ];

        if let Some(city) = criteria.city.city() {
            filters.push(Filter::Eq(Column::City, FilterValue::Text(city.name().to_string())));
        }

        if !criteria.min_beds.is_any() {
            filters.push(Filter::Gte(
                Column::Bedrooms,
                FilterValue::Int(u64::from(criteria.min_beds.count())),
            ));
        }

        if let crate::domain::PropertyTypeFilter::Only(kind) = criteria.property_type {
            filters.push(Filter::Eq(
                Column::PropertyType,
                FilterValue::Text(kind.as_str().to_string()),
            ));
        }

        Self {
            filters,
            order: Order::newest_first(),
            limit: MAX_RESULTS,
        }
    }

    pub fn table(&self) -> &'static str {
        TABLE
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// PostgREST query parameters, e.g. `("list_price", "lte.500000")`
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        pairs.extend(self.filters.iter().map(|filter| {
            (
                filter.column().as_str().to_string(),
                format!("{}.{}", filter.operator(), filter.value()),
            )
        }));
        let direction = if self.order.descending { "desc" } else { "asc" };
        pairs.push((
            "order".to_string(),
            format!("{}.{}", self.order.column.as_str(), direction),
        ));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }

    /// Whether a listing satisfies every predicate
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|filter| filter.matches(listing))
    }

    /// Evaluate the whole query over in-memory rows: filter, order, limit
    pub fn run(&self, rows: &[Listing]) -> Vec<Listing> {
        let mut selected: Vec<Listing> =
            rows.iter().filter(|row| self.matches(row)).cloned().collect();
        selected.sort_by(|a, b| self.order.compare(a, b));
        selected.truncate(self.limit as usize);
        selected
    }
}
