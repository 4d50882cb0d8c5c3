//! Provider implementations for photo search functionality.

use async_trait::async_trait;

use crate::errors::PhotoSearchError;
use crate::types::SearchPhotosResponse;

pub mod unsplash;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockProvider;
pub use unsplash::UnsplashProvider;

/// Trait for photo search providers.
///
/// Implementations resolve a search query into decoded photo results through
/// different backends (the real Unsplash API, mock providers for testing).
#[async_trait]
pub trait PhotoSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for photos by query with the given page size.
    ///
    /// # Errors
    /// - `PhotoSearchError::InvalidQuery` - Request could not be constructed
    /// - `PhotoSearchError::Transport` - Network connectivity issues
    /// - `PhotoSearchError::Decode` - Response payload could not be decoded
    async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPhotosResponse, PhotoSearchError>;
}
