//! Application-level errors

use std::time::Duration;

use domain::DomainError;
use thiserror::Error;

use crate::ports::ProviderError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A routing provider failed and no further fallback is defined
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// No provider answered before the race deadline
    #[error("No provider answered within {0:?}")]
    DeadlineElapsed(Duration),

    /// Cache backend failure
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use domain::ProviderId;

    use super::*;

    #[test]
    fn provider_error_message_names_the_provider() {
        let err = ApplicationError::from(ProviderError::new(ProviderId::Google, "No routes found"));
        assert_eq!(err.to_string(), "Google: No routes found");
    }

    #[test]
    fn deadline_error_includes_duration() {
        let err = ApplicationError::DeadlineElapsed(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }
}
