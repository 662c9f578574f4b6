//! Google Directions error types

use thiserror::Error;

/// Errors that can occur during Directions API calls
#[derive(Debug, Error)]
pub enum GoogleError {
    /// No API key is configured, so no client can be built
    #[error("No Google API key configured")]
    MissingApiKey,

    /// Connection to the Directions API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the Directions API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a Directions API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API answered but carried no usable route
    #[error("No routes found")]
    NoRoutesFound,

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GoogleError::NoRoutesFound.to_string(), "No routes found");

        let err = GoogleError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = GoogleError::RequestFailed("HTTP 500".to_string());
        assert!(err.to_string().contains("HTTP 500"));
    }
}
