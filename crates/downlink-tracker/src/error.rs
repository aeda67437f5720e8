//! Tracker error types

use thiserror::Error;

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Tracker-related errors
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// API error from the tracker
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Invalid base URL or issue key
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP transport error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}
