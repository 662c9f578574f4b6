//! OSRM routing HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OsrmConfig;
use crate::error::OsrmError;
use crate::models::{Point, RouteInfo, RouterAnswer, TripSummary};

/// Client trait for coordinate-to-coordinate routing
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute trip duration and distance between two points
    async fn route(&self, from: &Point, to: &Point) -> Result<TripSummary, OsrmError>;
}

/// OSRM driving-profile routing client
#[derive(Debug)]
pub struct OsrmRouteClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl OsrmRouteClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, OsrmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OsrmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.router_base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Round a duration in seconds up to whole minutes and a distance in
    /// meters up to whole kilometers
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn summarize(route: &RouteInfo) -> TripSummary {
        TripSummary {
            // Values are non-negative and far below u32::MAX for any road trip
            duration_minutes: (route.duration / 60.0).ceil() as u32,
            distance_km: (route.distance / 1000.0).ceil() as u32,
        }
    }
}

#[async_trait]
impl RoutingClient for OsrmRouteClient {
    #[instrument(skip(self))]
    async fn route(&self, from: &Point, to: &Point) -> Result<TripSummary, OsrmError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, from.lon, from.lat, to.lon, to.lat
        );

        debug!(?from, ?to, "Requesting route");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                OsrmError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                OsrmError::ConnectionFailed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(OsrmError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let answer: RouterAnswer = response
            .json()
            .await
            .map_err(|e| OsrmError::ParseError(e.to_string()))?;

        answer
            .routes
            .first()
            .map(Self::summarize)
            .ok_or(OsrmError::NoRoutesFound)
    }
}
