//! JSearch client. The single point of entry for all upstream job-search
//! calls; no other module talks to the provider directly.
//!
//! Exactly one attempt per request: no retry, no backoff. A transient
//! upstream failure is the caller's problem to surface, immediately.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::jobs::models::{JSearchResponse, RawJob};

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
/// Fixed page size forwarded on every call.
const NUM_PAGES: u32 = 1;
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Closed set of upstream failure kinds, so callers can react differently
/// instead of pattern-matching on a stringly-typed catch-all.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream rejected the request (status {status})")]
    UpstreamClient { status: u16 },

    #[error("upstream failed (status {status})")]
    UpstreamServer { status: u16 },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SearchError {
    fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Network(err)
        }
    }
}

/// Seam for the upstream provider. `AppState` carries this as a trait
/// object so handlers can be exercised against a stub in tests.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// Fetches raw listings for `query` at `page`, narrowing by `location`
    /// when one was extracted from the query.
    async fn search(
        &self,
        query: &str,
        page: u32,
        location: Option<&str>,
    ) -> Result<Vec<RawJob>, SearchError>;
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
}

impl JSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl JobSearchProvider for JSearchClient {
    async fn search(
        &self,
        query: &str,
        page: u32,
        location: Option<&str>,
    ) -> Result<Vec<RawJob>, SearchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("num_pages", NUM_PAGES.to_string()),
        ];
        if let Some(loc) = location {
            params.push(("location", loc.to_string()));
        }

        let response = self
            .client
            .get(JSEARCH_URL)
            .header("x-rapidapi-host", JSEARCH_HOST)
            .header("x-rapidapi-key", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(SearchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("JSearch returned {}: {}", status, body);
            return Err(if status.is_client_error() {
                SearchError::UpstreamClient {
                    status: status.as_u16(),
                }
            } else {
                SearchError::UpstreamServer {
                    status: status.as_u16(),
                }
            });
        }

        let body: JSearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else {
                SearchError::Decode(e)
            }
        })?;

        debug!("JSearch call succeeded: {} raw listings", body.data.len());

        Ok(body.data)
    }
}
