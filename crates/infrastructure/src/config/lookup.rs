//! Trip lookup configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the trip lookup orchestration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Upper bound in seconds on waiting for the first provider to answer
    #[serde(default = "default_race_deadline_secs")]
    pub race_deadline_secs: u64,
}

const fn default_race_deadline_secs() -> u64 {
    30
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            race_deadline_secs: default_race_deadline_secs(),
        }
    }
}

impl LookupConfig {
    /// The race deadline as a [`Duration`]
    #[must_use]
    pub const fn race_deadline(&self) -> Duration {
        Duration::from_secs(self.race_deadline_secs)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.race_deadline_secs == 0 {
            return Err("race_deadline_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
