//! Cache key for a directional route

use std::fmt;

use crate::errors::DomainError;

/// Separator between origin and destination in the encoded key
const SEPARATOR: char = ':';

/// Deterministic cache key derived from an ordered (origin, destination) pair
///
/// Encoded as `"<origin>:<destination>"`. The key is directional: the route
/// A→B and the route B→A produce different keys. Identical pairs always
/// produce identical keys, so cache reads and writes for the same route
/// land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey(String);

impl RouteKey {
    /// Build a key from an origin and destination
    ///
    /// Both endpoints are trimmed before encoding; an empty endpoint is
    /// rejected so no network lookup is ever attempted for it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocation`] when either endpoint is
    /// empty after trimming.
    pub fn new(origin: &str, destination: &str) -> Result<Self, DomainError> {
        let origin = origin.trim();
        let destination = destination.trim();

        if origin.is_empty() {
            return Err(DomainError::InvalidLocation(
                "origin must not be empty".to_string(),
            ));
        }
        if destination.is_empty() {
            return Err(DomainError::InvalidLocation(
                "destination must not be empty".to_string(),
            ));
        }

        Ok(Self(format!("{origin}{SEPARATOR}{destination}")))
    }

    /// The encoded key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
