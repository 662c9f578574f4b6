//! Google Directions HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GoogleConfig;
use crate::error::GoogleError;
use crate::models::{DirectionsResponse, Leg, TripSummary};

/// Client trait for driving-route lookups
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Compute trip duration and distance between two free-form locations
    async fn trip(&self, origin: &str, destination: &str) -> Result<TripSummary, GoogleError>;

    /// Whether the client holds the credentials it needs
    fn is_configured(&self) -> bool;
}

/// Google Directions API client
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: GoogleConfig,
}

impl GoogleDirectionsClient {
    /// Create a new Directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GoogleConfig) -> Result<Self, GoogleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GoogleError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Extract the trip summary from the first leg of the first route
    ///
    /// Duration arrives in seconds and distance in meters; both round down
    /// to whole minutes and kilometers.
    fn summarize(leg: &Leg) -> TripSummary {
        TripSummary {
            duration_minutes: u32::try_from(leg.duration.value / 60).unwrap_or(u32::MAX),
            distance_km: u32::try_from(leg.distance.value / 1000).unwrap_or(u32::MAX),
        }
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self))]
    async fn trip(&self, origin: &str, destination: &str) -> Result<TripSummary, GoogleError> {
        if self.config.api_key.is_empty() {
            return Err(GoogleError::MissingApiKey);
        }

        let url = format!("{}/maps/api/directions/json", self.config.base_url);
        let params = [
            ("origin", origin),
            ("destination", destination),
            ("key", self.config.api_key.as_str()),
        ];

        debug!(%origin, %destination, "Requesting directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GoogleError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GoogleError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GoogleError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let directions: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| GoogleError::ParseError(e.to_string()))?;

        match directions.status.as_str() {
            "OK" => {},
            "ZERO_RESULTS" | "NOT_FOUND" => return Err(GoogleError::NoRoutesFound),
            status => {
                let detail = directions
                    .error_message
                    .unwrap_or_else(|| status.to_string());
                return Err(GoogleError::RequestFailed(detail));
            },
        }

        directions
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .map(Self::summarize)
            .ok_or(GoogleError::NoRoutesFound)
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
