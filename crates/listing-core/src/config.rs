//! Source Configuration
//!
//! Where the hosted `properties` table lives and how to authenticate to it.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Path of the REST endpoint below the project url
const REST_PATH: &str = "rest/v1/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// Project url, e.g. `https://abc.supabase.co`
    pub url: Url,
    /// Public (anon) api key
    pub anon_key: String,
    /// Session token of the signed-in customer, when one is available
    #[serde(default)]
    pub access_token: Option<String>,
}

impl SourceConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(url).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let config = Self {
            url,
            anon_key: anon_key.to_string(),
            access_token: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON object like
    /// `{"url": "...", "anonKey": "...", "accessToken": "..."}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SourceConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::MissingAnonKey);
        }
        Ok(())
    }

    /// Endpoint for a table, e.g. `https://abc.supabase.co/rest/v1/properties`
    pub fn table_url(&self, table: &str) -> Result<Url, ConfigError> {
        let mut base = self.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(REST_PATH)
            .and_then(|rest| rest.join(table))
            .map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Bearer token: the session token when signed in, else the anon key
    pub fn bearer_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }
}
