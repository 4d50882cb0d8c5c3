//! Mock provider implementation for testing.

use async_trait::async_trait;

use super::PhotoSearchProvider;
use crate::errors::PhotoSearchError;
use crate::types::{Photo, PhotoUrls, PhotoUser, SearchPhotosResponse};

/// Mock provider for testing.
#[derive(Debug, Default)]
pub struct MockProvider;

impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PhotoSearchProvider for MockProvider {
    async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<SearchPhotosResponse, PhotoSearchError> {
        // Return mock data based on query
        let results: Vec<Photo> = (0..per_page.min(3))
            .map(|i| Photo {
                id: format!("mock-{i}"),
                created_at: Some(chrono::Utc::now()),
                width: 4000,
                height: 3000,
                description: Some(format!("Mock photo for {query}")),
                alt_description: None,
                urls: PhotoUrls {
                    raw: format!("https://images.example.com/{i}/raw"),
                    full: format!("https://images.example.com/{i}/full"),
                    regular: format!("https://images.example.com/{i}/regular"),
                    small: format!("https://images.example.com/{i}/small"),
                    thumb: format!("https://images.example.com/{i}/thumb"),
                },
                user: PhotoUser {
                    id: "mock-user".to_string(),
                    username: "mock".to_string(),
                    name: Some("Mock User".to_string()),
                },
            })
            .collect();

        Ok(SearchPhotosResponse {
            total: results.len() as u64,
            total_pages: 1,
            results,
        })
    }
}
