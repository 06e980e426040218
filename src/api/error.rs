//! Remote catalog API error types

use thiserror::Error;

/// Errors that can occur while fetching the catalog
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout, malformed body)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
