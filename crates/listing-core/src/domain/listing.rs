//! Listing Entity
//!
//! A row of the hosted `properties` table, as returned by `select *`.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Listing identifier (uuid string assigned by the data source)
pub type ListingId = String;

/// A property listing. Owned by the data source, read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    /// Category tag, e.g. "residential" or "new_construction"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address_line1: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zip_code: String,
    /// Asking price in whole dollars
    #[serde(deserialize_with = "whole_dollars")]
    pub list_price: u64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub property_type: String,
    pub primary_photo_url: Option<String>,

    // Columns used only for predicate evaluation and ordering:
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Create an active listing with the required fields and no extras
    pub fn new(id: impl Into<ListingId>, address_line1: &str, city: &str, list_price: u64) -> Self {
        Self {
            id: id.into(),
            category: "residential".to_string(),
            address_line1: address_line1.to_string(),
            city: city.to_string(),
            state: "FL".to_string(),
            zip_code: String::new(),
            list_price,
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            property_type: "single_family".to_string(),
            primary_photo_url: None,
            status: Some("active".to_string()),
            created_at: None,
        }
    }

    /// Whether the card should show the beds/baths/area row
    pub fn has_features(&self) -> bool {
        matches!(self.bedrooms, Some(beds) if beds > 0)
    }
}

/// Display-only text columns are nullable upstream; a null reads as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `numeric` prices may arrive as `450000` or `450000.00`
fn whole_dollars<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Whole(u64),
        Decimal(f64),
    }

    match Price::deserialize(deserializer)? {
        Price::Whole(amount) => Ok(amount),
        Price::Decimal(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount.round() as u64),
        Price::Decimal(amount) => Err(D::Error::custom(format!("invalid list_price {amount}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row() {
        let json = r#"{
            "id": "7d1c",
            "category": "new_construction",
            "address_line1": "123 Palm Ave",
            "city": "Miami",
            "state": "FL",
            "zip_code": "33101",
            "list_price": 450000,
            "bedrooms": 3,
            "bathrooms": 2.5,
            "square_feet": null,
            "property_type": "condo",
            "primary_photo_url": null,
            "status": "active",
            "created_at": "2024-03-01T12:30:00+00:00",
            "agent_id": "ignored"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "7d1c");
        assert_eq!(listing.bedrooms, Some(3));
        assert_eq!(listing.bathrooms, Some(2.5));
        assert!(listing.square_feet.is_none());
        assert_eq!(listing.status.as_deref(), Some("active"));
        assert!(listing.created_at.is_some());
    }

    #[test]
    fn test_status_and_created_at_optional() {
        let json = r#"{
            "id": "a", "category": "residential", "address_line1": "1 Main St",
            "city": "Tampa", "state": "FL", "zip_code": "33602", "list_price": 1,
            "bedrooms": null, "bathrooms": null, "square_feet": null,
            "property_type": "townhouse", "primary_photo_url": null
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert!(listing.status.is_none());
        assert!(listing.created_at.is_none());
    }

    #[test]
    fn test_nullable_text_columns_read_as_empty() {
        let json = r#"{
            "id": "b", "category": null, "address_line1": "9 Bay Rd",
            "city": "Naples", "state": null, "zip_code": null, "list_price": 1,
            "bedrooms": 2, "bathrooms": null, "square_feet": null,
            "property_type": null, "primary_photo_url": null
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.city, "Naples");
        assert_eq!(listing.zip_code, "");
        assert_eq!(listing.state, "");
        assert_eq!(listing.category, "");
        assert_eq!(listing.property_type, "");
    }

    #[test]
    fn test_decimal_price_rounds_to_dollars() {
        let row = |price: &str| {
            format!(
                r#"{{"id": "p", "category": "residential", "address_line1": "1 Main St",
                "city": "Tampa", "state": "FL", "zip_code": "33602", "list_price": {price},
                "bedrooms": null, "bathrooms": null, "square_feet": null,
                "property_type": "condo", "primary_photo_url": null}}"#
            )
        };

        let listing: Listing = serde_json::from_str(&row("450000.00")).unwrap();
        assert_eq!(listing.list_price, 450_000);
        let listing: Listing = serde_json::from_str(&row("319999.6")).unwrap();
        assert_eq!(listing.list_price, 320_000);
        assert!(serde_json::from_str::<Listing>(&row("-5.0")).is_err());
        assert!(serde_json::from_str::<Listing>(&row("\"cheap\"")).is_err());
    }

    #[test]
    fn test_has_features() {
        let mut listing = Listing::new("1", "1 Main St", "Tampa", 100);
        assert!(!listing.has_features());
        listing.bedrooms = Some(0);
        assert!(!listing.has_features());
        listing.bedrooms = Some(2);
        assert!(listing.has_features());
    }
}
