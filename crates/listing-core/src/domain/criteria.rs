//! Search Criteria
//!
//! Closed sets behind the search selects. Each value round-trips through
//! the `<option value>` string used by the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;

/// Option value meaning "no constraint" for city and property type
pub const ALL_OPTION: &str = "all";

// ========================
// City
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Miami,
    Tampa,
    Orlando,
    Jacksonville,
    FortMyers,
    Naples,
    Sarasota,
    Tallahassee,
    FortLauderdale,
    WestPalmBeach,
}

impl City {
    /// Cities in select order
    pub const ALL: [City; 10] = [
        City::Miami,
        City::Tampa,
        City::Orlando,
        City::Jacksonville,
        City::FortMyers,
        City::Naples,
        City::Sarasota,
        City::Tallahassee,
        City::FortLauderdale,
        City::WestPalmBeach,
    ];

    /// Name as stored in the `city` column
    pub fn name(&self) -> &'static str {
        match self {
            City::Miami => "Miami",
            City::Tampa => "Tampa",
            City::Orlando => "Orlando",
            City::Jacksonville => "Jacksonville",
            City::FortMyers => "Fort Myers",
            City::Naples => "Naples",
            City::Sarasota => "Sarasota",
            City::Tallahassee => "Tallahassee",
            City::FortLauderdale => "Fort Lauderdale",
            City::WestPalmBeach => "West Palm Beach",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.name() == s)
            .ok_or_else(|| CriteriaError::UnknownCity(s.to_string()))
    }
}

/// City selection: every city, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CityFilter {
    #[default]
    All,
    Only(City),
}

impl CityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityFilter::All => ALL_OPTION,
            CityFilter::Only(city) => city.name(),
        }
    }

    pub fn city(&self) -> Option<City> {
        match self {
            CityFilter::All => None,
            CityFilter::Only(city) => Some(*city),
        }
    }
}

impl FromStr for CityFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_OPTION {
            Ok(CityFilter::All)
        } else {
            s.parse().map(CityFilter::Only)
        }
    }
}

// ========================
// Price ceiling
// ========================

/// Upper bound on list price. The floor is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceCeiling {
    Upto250K,
    Upto500K,
    Upto750K,
    Upto1M,
    #[default]
    Upto2M,
    Upto5M,
}

impl PriceCeiling {
    pub const ALL: [PriceCeiling; 6] = [
        PriceCeiling::Upto250K,
        PriceCeiling::Upto500K,
        PriceCeiling::Upto750K,
        PriceCeiling::Upto1M,
        PriceCeiling::Upto2M,
        PriceCeiling::Upto5M,
    ];

    pub fn amount(&self) -> u64 {
        match self {
            PriceCeiling::Upto250K => 250_000,
            PriceCeiling::Upto500K => 500_000,
            PriceCeiling::Upto750K => 750_000,
            PriceCeiling::Upto1M => 1_000_000,
            PriceCeiling::Upto2M => 2_000_000,
            PriceCeiling::Upto5M => 5_000_000,
        }
    }

    /// Breakpoint with exactly this amount
    pub fn from_amount(amount: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|ceiling| ceiling.amount() == amount)
    }

    pub fn label(&self) -> String {
        let price = crate::format::format_price(self.amount());
        match self {
            // The top breakpoint reads as open-ended even though the query caps it.
            PriceCeiling::Upto5M => format!("{}+", price),
            _ => price,
        }
    }
}

impl FromStr for PriceCeiling {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(PriceCeiling::from_amount)
            .ok_or_else(|| CriteriaError::UnknownPriceCeiling(s.to_string()))
    }
}

// ========================
// Minimum bedrooms
// ========================

/// Minimum bedroom count, 0 meaning no constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MinBedrooms(u8);

impl MinBedrooms {
    pub const ANY: MinBedrooms = MinBedrooms(0);
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Result<Self, CriteriaError> {
        if count <= Self::MAX {
            Ok(Self(count))
        } else {
            Err(CriteriaError::InvalidMinBedrooms(count.to_string()))
        }
    }

    /// Every selectable value, `Any` first
    pub fn options() -> impl Iterator<Item = MinBedrooms> {
        (0..=Self::MAX).map(MinBedrooms)
    }

    pub fn count(&self) -> u32 {
        u32::from(self.0)
    }

    pub fn is_any(&self) -> bool {
        self.0 == 0
    }

    pub fn label(&self) -> String {
        if self.is_any() {
            "Any".to_string()
        } else {
            format!("{}+", self.0)
        }
    }
}

impl FromStr for MinBedrooms {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| CriteriaError::InvalidMinBedrooms(s.to_string()))
            .and_then(MinBedrooms::new)
    }
}

// ========================
// Property type
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::SingleFamily,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::MultiFamily,
    ];

    /// Tag as stored in the `property_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single_family",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::MultiFamily => "multi_family",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MultiFamily => "Multi-Family",
        }
    }
}

impl FromStr for PropertyType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownPropertyType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyTypeFilter::All => ALL_OPTION,
            PropertyTypeFilter::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for PropertyTypeFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_OPTION {
            Ok(PropertyTypeFilter::All)
        } else {
            s.parse().map(PropertyTypeFilter::Only)
        }
    }
}

// ========================
// Grouped criteria
// ========================

/// The criteria that decide what gets fetched (free text is applied locally)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: CityFilter,
    pub max_price: PriceCeiling,
    pub min_beds: MinBedrooms,
    pub property_type: PropertyTypeFilter,
}
