//! Photo search service facade.
//!
//! Wraps a search provider behind a small API so callers never deal with
//! request construction or transport directly.

use crate::config::UnsplashConfig;
use crate::errors::PhotoSearchError;
use crate::providers::{PhotoSearchProvider, UnsplashProvider};
use crate::types::SearchPhotosResponse;

/// Photo search service over a pluggable provider.
#[derive(Debug)]
pub struct PhotoSearchService {
    provider: Box<dyn PhotoSearchProvider>,
    default_per_page: u32,
}

impl PhotoSearchService {
    /// Creates a new service backed by the real Unsplash provider.
    pub fn new(config: UnsplashConfig) -> Self {
        let default_per_page = config.default_per_page;
        Self {
            provider: Box::new(UnsplashProvider::new(config)),
            default_per_page,
        }
    }

    /// Creates a service with an explicit provider.
    pub fn with_provider(provider: Box<dyn PhotoSearchProvider>, default_per_page: u32) -> Self {
        Self {
            provider,
            default_per_page,
        }
    }

    /// Creates a service with the mock provider for testing.
    #[cfg(test)]
    pub fn new_with_mock() -> Self {
        Self {
            provider: Box::new(crate::providers::MockProvider::new()),
            default_per_page: crate::config::DEFAULT_PER_PAGE,
        }
    }

    /// Search for photos using the default page size.
    ///
    /// # Errors
    /// - `PhotoSearchError::Transport` - Network connectivity issues
    /// - `PhotoSearchError::Decode` - Response payload could not be decoded
    pub async fn search(&self, query: &str) -> Result<SearchPhotosResponse, PhotoSearchError> {
        self.provider
            .search_photos(query, self.default_per_page)
            .await
    }

    /// Search for photos with an explicit page size.
    ///
    /// # Errors
    /// - `PhotoSearchError::Transport` - Network connectivity issues
    /// - `PhotoSearchError::Decode` - Response payload could not be decoded
    pub async fn search_with_limit(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPhotosResponse, PhotoSearchError> {
        self.provider.search_photos(query, per_page).await
    }
}
