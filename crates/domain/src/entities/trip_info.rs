//! Trip information entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::ProviderId;

/// Result of a successful trip lookup
///
/// Carries the travel duration and distance between an origin and a
/// destination, plus the provider the numbers came from. Constructed by a
/// routing provider or deserialized from a cache record, then immutable.
///
/// A failed lookup is never a `TripInfo` — failures travel as errors tagged
/// with the provider that produced them, so invalid duration/distance values
/// are unrepresentable on the error path.
///
/// Cache records serialize this entity as a flat JSON object. The "no error"
/// case is canonical by omission: only successful results are ever written,
/// and an `error` field in a foreign record is ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripInfo {
    /// Provider that produced the result (`None` for cache records written
    /// without provenance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderId>,

    /// Total travel duration in minutes
    pub duration_minutes: u32,

    /// Total travel distance in kilometers
    pub distance_km: u32,
}

impl TripInfo {
    /// Create a trip info result attributed to a provider
    #[must_use]
    pub const fn new(provider: ProviderId, duration_minutes: u32, distance_km: u32) -> Self {
        Self {
            provider: Some(provider),
            duration_minutes,
            distance_km,
        }
    }
}

impl fmt::Display for TripInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.provider {
            Some(provider) => write!(
                f,
                "{}min / {}km via {provider}",
                self.duration_minutes, self.distance_km
            ),
            None => write!(f, "{}min / {}km", self.duration_minutes, self.distance_km),
        }
    }
}
