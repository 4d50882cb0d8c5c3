//! Error types for photo search functionality.

use thiserror::Error;

/// Errors that can occur during photo search operations.
#[derive(Debug, Error)]
pub enum PhotoSearchError {
    /// Search query could not be represented as a valid request URL.
    #[error("Invalid query '{query}': {reason}")]
    InvalidQuery {
        /// The search query that could not be encoded
        query: String,
        /// The reason the request could not be formed
        reason: String,
    },

    /// Network-layer failure: DNS, connect, TLS, timeout, or cancellation.
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason for the transport failure
        reason: String,
    },

    /// Failed to decode the response payload.
    #[error("Decode error: {reason}")]
    Decode {
        /// The reason for the decode failure
        reason: String,
    },

    /// Client configuration is missing or unusable.
    #[error("Configuration error: {reason}")]
    Config {
        /// The reason the configuration is unusable
        reason: String,
    },
}
