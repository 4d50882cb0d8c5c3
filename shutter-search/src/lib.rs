//! Shutter Search - Unsplash photo search client

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Builds structured search requests against the Unsplash photo-search API,
//! executes them over a shared HTTP transport, and decodes the JSON payload
//! into typed results.

pub mod config;
pub mod errors;
pub mod fetch;
pub mod providers;
pub mod request;
pub mod service;
pub mod types;

// Re-export main types
pub use config::UnsplashConfig;
pub use errors::PhotoSearchError;
pub use fetch::HttpTransport;
pub use request::SearchRequest;
pub use service::PhotoSearchService;
pub use types::{Photo, PhotoUrls, PhotoUser, SearchPhotosResponse};

/// Convenience type alias for Results with PhotoSearchError.
pub type Result<T> = std::result::Result<T, PhotoSearchError>;
