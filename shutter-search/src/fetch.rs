//! HTTP transport for executing search requests.
//!
//! One `reqwest::Client` is created per transport and shared by cloning;
//! clones reuse the same connection pool. Connections are reclaimed when the
//! last clone is dropped.

use bytes::Bytes;

use crate::errors::PhotoSearchError;
use crate::request::SearchRequest;

/// Shared transport that executes search requests over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Execute a request and return the raw response body.
    ///
    /// Produces exactly one outcome: the body bytes or a transport error.
    /// Status codes and headers are not inspected here; rejecting non-success
    /// responses is the decoding layer's concern. Dropping the returned
    /// future aborts the in-flight request and delivers no outcome.
    ///
    /// # Errors
    ///
    /// - `PhotoSearchError::Transport` - DNS, connect, TLS, or timeout failure
    pub async fn fetch(&self, request: &SearchRequest) -> Result<Bytes, PhotoSearchError> {
        tracing::debug!(url = %request.url(), "executing search request");

        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .send()
            .await
            .map_err(|e| PhotoSearchError::Transport {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let body = response
            .bytes()
            .await
            .map_err(|e| PhotoSearchError::Transport {
                reason: format!("reading response body failed: {e}"),
            })?;

        tracing::trace!(bytes = body.len(), "search response received");
        Ok(body)
    }
}
