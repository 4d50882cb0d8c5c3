//! Unsplash search provider for production use.

use async_trait::async_trait;

use super::PhotoSearchProvider;
use crate::config::UnsplashConfig;
use crate::errors::PhotoSearchError;
use crate::fetch::HttpTransport;
use crate::request::SearchRequest;
use crate::types::SearchPhotosResponse;

/// Photo search provider backed by the Unsplash API.
///
/// Composes the request builder, the shared HTTP transport, and JSON
/// decoding. The transport is status-blind; an HTTP error body simply fails
/// to decode and surfaces as a `Decode` error.
#[derive(Debug, Clone)]
pub struct UnsplashProvider {
    config: UnsplashConfig,
    transport: HttpTransport,
}

impl UnsplashProvider {
    /// Create a provider with its own transport.
    pub fn new(config: UnsplashConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }

    /// Create a provider sharing an existing transport.
    pub fn with_transport(config: UnsplashConfig, transport: HttpTransport) -> Self {
        Self { config, transport }
    }
}

#[async_trait]
impl PhotoSearchProvider for UnsplashProvider {
    async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPhotosResponse, PhotoSearchError> {
        let request = SearchRequest::search_photos(&self.config, query, Some(per_page))?;
        let body = self.transport.fetch(&request).await?;

        serde_json::from_slice(&body).map_err(|e| PhotoSearchError::Decode {
            reason: format!("JSON parsing failed: {e}"),
        })
    }
}
