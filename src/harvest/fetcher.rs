//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during a harvest:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for JSON documents
//! - Status classification (2xx vs everything else)
//! - Extraction of the `next` pagination cursor
//!
//! There is no retry: every request is issued exactly once.

use crate::config::ApiConfig;
use crate::model::{Page, REL_NEXT};
use crate::FetchError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The API configuration (user agent, timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use stac_harvest::config::ApiConfig;
/// use stac_harvest::harvest::build_http_client;
///
/// let client = build_http_client(&ApiConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ApiConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and decodes its JSON body
///
/// # Request Flow
///
/// | Outcome | Result |
/// |---------|--------|
/// | Timeout, connection failure | `FetchError::Network` |
/// | Non-2xx status | `FetchError::Status` (status logged) |
/// | 2xx, body is not the expected JSON | `FetchError::Decode` |
/// | 2xx, valid JSON | `Ok(T)` |
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Status code: {} ({})", status.as_u16(), url);
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetches one page of a paginated `collections` listing
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page, FetchError> {
    fetch_json(client, url).await
}

/// Returns the href of the first `next` link of a page
///
/// A `next` link without an href (or with an empty one) ends the chain.
pub fn next_link(page: &Page) -> Option<String> {
    page.links
        .iter()
        .find(|link| link.is_rel(REL_NEXT))
        .and_then(|link| link.href.clone())
        .filter(|href| !href.is_empty())
}
