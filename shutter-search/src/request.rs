//! Search request construction.
//!
//! Requests are built exclusively through structured query-pair composition.
//! Reserved characters in the search term (`&`, `?`, `#`, spaces) are
//! percent-encoded by the `url` crate and round-trip exactly.

use reqwest::Method;
use url::Url;

use crate::config::{SEARCH_PAGE, SEARCH_PHOTOS_PATH, UnsplashConfig};
use crate::errors::PhotoSearchError;

/// Immutable descriptor of a single photo search request.
///
/// Holds the fixed GET method and a fully-formed URL carrying the `page`,
/// `per_page`, `query`, and `client_id` parameters. Two descriptors built
/// from identical inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    method: Method,
    url: Url,
}

impl SearchRequest {
    /// Build a search request for the given query.
    ///
    /// `per_page` falls back to the configured default (80) when `None`; the
    /// caller-supplied value is always honored. The page number is fixed at 1.
    /// Empty queries are not rejected; callers are expected to avoid them.
    ///
    /// # Errors
    ///
    /// - `PhotoSearchError::Config` - If the configured access key is empty
    /// - `PhotoSearchError::InvalidQuery` - If the configured base URL cannot
    ///   form a valid request URL
    pub fn search_photos(
        config: &UnsplashConfig,
        query: &str,
        per_page: Option<u32>,
    ) -> Result<Self, PhotoSearchError> {
        if config.access_key.is_empty() {
            return Err(PhotoSearchError::Config {
                reason: "access key is empty".to_string(),
            });
        }

        let mut url =
            Url::parse(&config.api_url).map_err(|e| PhotoSearchError::InvalidQuery {
                query: query.to_string(),
                reason: format!("invalid API base URL '{}': {e}", config.api_url),
            })?;

        if url.cannot_be_a_base() {
            return Err(PhotoSearchError::InvalidQuery {
                query: query.to_string(),
                reason: format!("API base URL '{}' cannot carry a path", config.api_url),
            });
        }

        url.set_path(SEARCH_PHOTOS_PATH);

        let per_page = per_page.unwrap_or(config.default_per_page);
        url.query_pairs_mut()
            .append_pair("page", &SEARCH_PAGE.to_string())
            .append_pair("per_page", &per_page.to_string())
            .append_pair("query", query)
            .append_pair("client_id", &config.access_key);

        Ok(Self {
            method: Method::GET,
            url,
        })
    }

    /// HTTP method of the request (always GET).
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Fully-formed request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}
