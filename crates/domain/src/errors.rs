//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Origin or destination failed validation
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}
