//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `cache`: cache backend selection
//! - `lookup`: trip lookup orchestration settings
//!
//! Provider settings reuse the config types exposed by the integration
//! crates, so each provider's section lives next to its client.

mod cache;
mod lookup;
mod server;

use integration_google::GoogleConfig;
use integration_osrm::OsrmConfig;
use serde::{Deserialize, Serialize};

pub use cache::{CacheBackend, CacheConfig};
pub use lookup::LookupConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Trip lookup configuration
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Google Directions configuration
    #[serde(default)]
    pub google: GoogleConfig,

    /// OSRM / Nominatim configuration
    #[serde(default)]
    pub osrm: OsrmConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest first: built-in defaults, `config.toml` (if
    /// present), `GEOTRIP_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., GEOTRIP_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("GEOTRIP")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.cache.validate()?;
        self.lookup.validate()?;
        self.google.validate()?;
        self.osrm.validate()?;
        Ok(())
    }
}
