//! Client configuration for the Unsplash search API.
//!
//! The access key is a configuration value, not a compiled-in literal, so it
//! can be rotated and replaced with a test double.

use crate::errors::PhotoSearchError;

/// Fixed path of the photo search endpoint.
pub const SEARCH_PHOTOS_PATH: &str = "/search/photos";

/// Results are always taken from the first page.
pub const SEARCH_PAGE: u32 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PER_PAGE: u32 = 80;

/// Configuration for the Unsplash photo search client.
#[derive(Debug, Clone)]
pub struct UnsplashConfig {
    /// Base URL of the Unsplash API
    pub api_url: String,
    /// API access key, sent as the `client_id` query parameter
    pub access_key: String,
    /// Page size used when the caller does not supply one
    pub default_per_page: u32,
}

impl UnsplashConfig {
    /// Create configuration from the `UNSPLASH_ACCESS_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// - `PhotoSearchError::Config` - If the variable is unset or empty
    pub fn from_env() -> Result<Self, PhotoSearchError> {
        let access_key =
            std::env::var("UNSPLASH_ACCESS_KEY").map_err(|_| PhotoSearchError::Config {
                reason: "UNSPLASH_ACCESS_KEY is not set".to_string(),
            })?;

        if access_key.is_empty() {
            return Err(PhotoSearchError::Config {
                reason: "UNSPLASH_ACCESS_KEY is empty".to_string(),
            });
        }

        Ok(Self::with_access_key(access_key))
    }

    /// Create configuration with an explicit access key.
    ///
    /// Allows configuration-driven credentials instead of an environment variable.
    pub fn with_access_key(access_key: impl Into<String>) -> Self {
        Self {
            api_url: "https://api.unsplash.com".to_string(),
            access_key: access_key.into(),
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_access_key_defaults() {
        let config = UnsplashConfig::with_access_key("test-key");

        assert_eq!(config.api_url, "https://api.unsplash.com");
        assert_eq!(config.access_key, "test-key");
        assert_eq!(config.default_per_page, DEFAULT_PER_PAGE);
    }
}
