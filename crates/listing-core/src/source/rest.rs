//! Hosted REST Source
//!
//! Reads listings from a PostgREST endpoint (`/rest/v1/properties`).
//! No timeout and no retry: a fetch waits for the endpoint to answer or fail.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use super::ListingSource;
use crate::config::SourceConfig;
use crate::domain::Listing;
use crate::error::{FetchError, FetchResult};
use crate::query::ListingQuery;

#[derive(Debug, Clone)]
pub struct RestListingSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl RestListingSource {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Full request url, predicates rendered as query parameters
    pub fn request_url(&self, query: &ListingQuery) -> FetchResult<Url> {
        self.config.validate()?;
        let mut url = self.config.table_url(query.table())?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        Ok(url)
    }
}

#[async_trait(?Send)]
impl ListingSource for RestListingSource {
    async fn fetch(&self, query: &ListingQuery) -> FetchResult<Vec<Listing>> {
        let url = self.request_url(query)?;
        log::debug!("[SOURCE] GET {}", url);

        let response = self
            .client
            .get(url)
            .header("apikey", &self.config.anon_key)
            .header(ACCEPT, "application/json")
            .bearer_auth(self.config.bearer_token())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        decode_listings(&body)
    }
}

/// Decode a JSON array of `properties` rows
pub fn decode_listings(body: &str) -> FetchResult<Vec<Listing>> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
