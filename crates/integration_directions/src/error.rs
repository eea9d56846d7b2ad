//! Directions error types

use thiserror::Error;

/// Errors that can occur during directions lookups
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The routing service answered with an error code
    #[error("Routing service returned {code}: {message}")]
    Api {
        /// OSRM response code, e.g. `InvalidQuery` or `NoSegment`
        code: String,
        /// Human-readable message from the service
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}
