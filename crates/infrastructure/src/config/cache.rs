//! Cache backend configuration.

use serde::{Deserialize, Serialize};

/// Which cache backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process Moka cache (default)
    #[default]
    Memory,
    /// Distributed Redis cache
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Selected backend
    #[serde(default)]
    pub backend: CacheBackend,

    /// Redis connection URL (only used with the redis backend)
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Maximum in-memory capacity in megabytes (only used with the memory
    /// backend)
    #[serde(default = "default_max_capacity_mb")]
    pub max_capacity_mb: u64,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

const fn default_max_capacity_mb() -> u64 {
    64
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis_url: default_redis_url(),
            max_capacity_mb: default_max_capacity_mb(),
        }
    }
}

impl CacheConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == CacheBackend::Redis && self.redis_url.is_empty() {
            return Err("redis_url must be set when the redis backend is selected".to_string());
        }
        if self.max_capacity_mb == 0 {
            return Err("max_capacity_mb must be greater than 0".to_string());
        }
        Ok(())
    }
}
