//! OSRM routing adapter - Implements RoutingPort using integration_osrm
//!
//! OSRM routes between coordinates, so both endpoints are geocoded via
//! Nominatim first, then handed to the router.

use application::ports::{ProviderError, RoutingPort};
use async_trait::async_trait;
use domain::{ProviderId, TripInfo};
use integration_osrm::{
    GeocodingClient, NominatimGeocodingClient, OsrmRouteClient, Point, RoutingClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for the OpenStreetMap provider (OSRM routing + Nominatim geocoding)
pub struct OsrmRoutingAdapter {
    routing_client: OsrmRouteClient,
    geocoding_client: NominatimGeocodingClient,
}

impl std::fmt::Debug for OsrmRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmRoutingAdapter")
            .field("routing_client", &"OsrmRouteClient")
            .field("geocoding_client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl OsrmRoutingAdapter {
    /// Create a new OSRM routing adapter
    pub fn new(
        routing_client: OsrmRouteClient,
        geocoding_client: NominatimGeocodingClient,
    ) -> Self {
        Self {
            routing_client,
            geocoding_client,
        }
    }

    async fn geocode(&self, address: &str) -> Result<Point, ProviderError> {
        self.geocoding_client.geocode(address).await.map_err(|e| {
            warn!(%address, %e, "Failed to geocode address");
            ProviderError::new(ProviderId::Openstreetmap, e.to_string())
        })
    }
}

#[async_trait]
impl RoutingPort for OsrmRoutingAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Openstreetmap
    }

    #[instrument(skip(self))]
    async fn trip_info(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TripInfo, ProviderError> {
        debug!(%origin, %destination, "Geocoding trip endpoints");

        let from = self.geocode(origin).await?;
        let to = self.geocode(destination).await?;

        let summary = self.routing_client.route(&from, &to).await.map_err(|e| {
            warn!(%origin, %destination, %e, "Route lookup failed");
            ProviderError::new(ProviderId::Openstreetmap, e.to_string())
        })?;

        Ok(TripInfo::new(
            ProviderId::Openstreetmap,
            summary.duration_minutes,
            summary.distance_km,
        ))
    }

    async fn is_available(&self) -> bool {
        // No credentials needed; the public endpoints are assumed reachable
        true
    }
}
