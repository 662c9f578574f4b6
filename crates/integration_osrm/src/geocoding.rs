//! Nominatim geocoding client
//!
//! Converts free-form address strings to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OsrmConfig;
use crate::error::OsrmError;
use crate::models::Point;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<Point, OsrmError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, OsrmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("GeoTrip/0.3 (https://github.com/geotrip/geotrip)")
            .build()
            .map_err(|e| OsrmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.nominatim_base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Point, OsrmError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(OsrmError::NoLocationMatches(
                "address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.base_url);
        let params = [("q", address), ("format", "jsonv2"), ("limit", "1")];

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
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

        let points: Vec<Point> = response
            .json()
            .await
            .map_err(|e| OsrmError::ParseError(e.to_string()))?;

        points
            .into_iter()
            .next()
            .ok_or_else(|| OsrmError::NoLocationMatches(address.to_string()))
    }
}
