//! Client error types

use thiserror::Error;

/// Client error type
///
/// Server failures carry the human-readable `message` from the wire envelope;
/// the HTTP status picks the variant.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource conflict (duplicate barcode or category name)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Business rule violation (e.g. reference to a missing category)
    #[error("Rejected: {0}")]
    BusinessRule(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
