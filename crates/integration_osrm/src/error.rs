//! OSRM and Nominatim error types

use thiserror::Error;

/// Errors that can occur during routing or geocoding operations
#[derive(Debug, Error)]
pub enum OsrmError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An address could not be resolved to coordinates
    #[error("No location matches: {0}")]
    NoLocationMatches(String),

    /// The router answered but carried no route
    #[error("No routes found")]
    NoRoutesFound,

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
