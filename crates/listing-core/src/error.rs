//! Error Types
//!
//! One runtime failure is handled by the portal (a fetch that cannot be
//! satisfied). Parsing and configuration have their own small enums.

use thiserror::Error;

/// Common result type for listing fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// The listing source could not satisfy a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No source configuration was available when the fetch was issued
    #[error("listing source is not configured")]
    Unconfigured,
    /// Configuration was present but cannot address the endpoint
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("listing source answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed listing payload: {0}")]
    Decode(String),
}

/// An option value that does not belong to the enumerated criteria
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("unknown price ceiling: {0}")]
    UnknownPriceCeiling(String),
    #[error("invalid minimum bedrooms: {0}")]
    InvalidMinBedrooms(String),
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid source config: {0}")]
    Malformed(String),
    #[error("source url must be http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("anon key is empty")]
    MissingAnonKey,
}
