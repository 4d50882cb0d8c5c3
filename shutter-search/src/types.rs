//! Data types for the Unsplash search payload.
//!
//! Field names match the API's snake_case JSON directly.

use serde::{Deserialize, Serialize};

/// Response from the `/search/photos` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPhotosResponse {
    /// Total number of matching photos
    pub total: u64,
    /// Total number of result pages
    pub total_pages: u64,
    /// Photos on the requested page
    pub results: Vec<Photo>,
}

/// A single photo result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Unsplash photo identifier
    pub id: String,
    /// When the photo was published
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Author-provided description
    pub description: Option<String>,
    /// Accessibility description
    pub alt_description: Option<String>,
    /// Image URLs at various sizes
    pub urls: PhotoUrls,
    /// The photographer
    pub user: PhotoUser,
}

/// Image URLs for one photo at the sizes Unsplash serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUrls {
    /// Original unprocessed image
    pub raw: String,
    /// Full-resolution image
    pub full: String,
    /// Display-sized image
    pub regular: String,
    /// Small image
    pub small: String,
    /// Thumbnail image
    pub thumb: String,
}

/// The photographer attached to a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUser {
    /// Unsplash user identifier
    pub id: String,
    /// Account username
    pub username: String,
    /// Display name
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "total": 133,
        "total_pages": 7,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "created_at": "2014-11-18T14:35:36Z",
                "width": 4000,
                "height": 3000,
                "description": "A man drinking a coffee.",
                "alt_description": null,
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1?raw",
                    "full": "https://images.unsplash.com/photo-1?full",
                    "regular": "https://images.unsplash.com/photo-1?regular",
                    "small": "https://images.unsplash.com/photo-1?small",
                    "thumb": "https://images.unsplash.com/photo-1?thumb"
                },
                "user": {
                    "id": "Ul0QVz12Goo",
                    "username": "ugmonk",
                    "name": "Jeff Sheldon"
                }
            }
        ]
    }"#;

    #[test]
    fn test_decode_search_response() {
        let response: SearchPhotosResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();

        assert_eq!(response.total, 133);
        assert_eq!(response.total_pages, 7);
        assert_eq!(response.results.len(), 1);

        let photo = &response.results[0];
        assert_eq!(photo.id, "eOLpJytrbsQ");
        assert_eq!(photo.width, 4000);
        assert_eq!(photo.description.as_deref(), Some("A man drinking a coffee."));
        assert!(photo.alt_description.is_none());
        assert_eq!(photo.user.username, "ugmonk");
        assert!(photo.created_at.is_some());
    }

    #[test]
    fn test_decode_empty_results() {
        let response: SearchPhotosResponse =
            serde_json::from_str(r#"{"total": 0, "total_pages": 0, "results": []}"#).unwrap();

        assert!(response.results.is_empty());
    }
}
