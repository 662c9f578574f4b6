//! Routing provider port
//!
//! Defines the capability every routing data provider exposes: compute trip
//! duration and distance for an origin/destination pair. Adapters in the
//! infrastructure layer implement this port over concrete provider APIs.

use async_trait::async_trait;
use domain::{ProviderId, TripInfo};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Failure reported by a routing provider, tagged with its identity
///
/// The tag drives fallback selection: the orchestrator resolves the failing
/// provider's statically paired alternate from it. All provider failure
/// modes — no client available, no route found, malformed upstream response,
/// empty result set — surface as this error, never as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{provider}: {message}")]
pub struct ProviderError {
    /// Provider that produced the failure
    pub provider: ProviderId,
    /// Human-readable failure description
    pub message: String,
}

impl ProviderError {
    /// Create a provider error
    pub fn new(provider: ProviderId, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
        }
    }
}

/// Port for routing providers
///
/// Implementations must be safe to invoke concurrently with other providers
/// and with themselves; a lookup races all configured providers at once.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Identity of this provider
    fn id(&self) -> ProviderId;

    /// Compute trip duration and distance between two free-form locations
    async fn trip_info(&self, origin: &str, destination: &str)
    -> Result<TripInfo, ProviderError>;

    /// Check if the provider is ready to serve lookups
    async fn is_available(&self) -> bool;
}
