//! Google routing adapter - Implements RoutingPort using integration_google

use application::ports::{ProviderError, RoutingPort};
use async_trait::async_trait;
use domain::{ProviderId, TripInfo};
use integration_google::{DirectionsClient, GoogleDirectionsClient};
use tracing::{instrument, warn};

/// Adapter for the Google Directions provider
pub struct GoogleRoutingAdapter {
    client: GoogleDirectionsClient,
}

impl std::fmt::Debug for GoogleRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleRoutingAdapter")
            .field("client", &"GoogleDirectionsClient")
            .finish()
    }
}

impl GoogleRoutingAdapter {
    /// Create a new Google routing adapter
    pub fn new(client: GoogleDirectionsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingPort for GoogleRoutingAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Google
    }

    #[instrument(skip(self))]
    async fn trip_info(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TripInfo, ProviderError> {
        let summary = self.client.trip(origin, destination).await.map_err(|e| {
            warn!(%origin, %destination, %e, "Directions lookup failed");
            ProviderError::new(ProviderId::Google, e.to_string())
        })?;

        Ok(TripInfo::new(
            ProviderId::Google,
            summary.duration_minutes,
            summary.distance_km,
        ))
    }

    async fn is_available(&self) -> bool {
        self.client.is_configured()
    }
}
