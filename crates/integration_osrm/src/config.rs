//! OSRM and Nominatim configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OSRM router and Nominatim geocoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmConfig {
    /// Base URL for the OSRM routing engine
    #[serde(default = "default_router_base_url")]
    pub router_base_url: String,

    /// Base URL for the Nominatim geocoding API
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_router_base_url() -> String {
    "http://router.project-osrm.org".to_string()
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            router_base_url: default_router_base_url(),
            nominatim_base_url: default_nominatim_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OsrmConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.router_base_url.is_empty() {
            return Err("router_base_url must not be empty".to_string());
        }
        if self.nominatim_base_url.is_empty() {
            return Err("nominatim_base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
